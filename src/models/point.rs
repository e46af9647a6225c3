//! Coordinates, stops, and matrix points.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_miles;

/// Reserved id carried by the home point. Never shown to users.
pub const HOME_ID: &str = "__home__";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, expected in [-90, 90].
    pub lat: f64,
    /// Longitude, expected in [-180, 180].
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single appointment location to be visited.
///
/// The order in which stops are handed to the optimizer is the caller's
/// current visiting order.
///
/// # Examples
///
/// ```
/// use dayroute::models::Stop;
///
/// let stop = Stop::new("a1", 34.0296, -118.4953, "Dental cleaning");
/// assert_eq!(stop.id, "a1");
/// assert_eq!(stop.title, "Dental cleaning");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Opaque caller-supplied identifier.
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Human-readable label used in order-change lines.
    pub title: String,
}

impl Stop {
    /// Creates a stop.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            title: title.into(),
        }
    }

    /// Location of this stop.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// A location indexed by the distance matrix: either home or a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }

    /// Creates the home point, tagged with [`HOME_ID`].
    pub fn home(coords: Coordinates) -> Self {
        Self::new(HOME_ID, coords.lat, coords.lng)
    }

    /// Returns `true` if this is the home point.
    pub fn is_home(&self) -> bool {
        self.id == HOME_ID
    }

    /// Great-circle distance to another point, in miles.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_miles(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<&Stop> for Point {
    fn from(stop: &Stop) -> Self {
        Self::new(stop.id.clone(), stop.lat, stop.lng)
    }
}
