//! Address-to-coordinate memoization.
//!
//! Geocoding happens outside the optimizer. Services that geocode addresses
//! before building a request can plug a [`GeocodeCache`] in front of their
//! geocoder instead of keeping results in process-wide state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// A geocoder answer for one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub lat: f64,
    pub lng: f64,
    /// The geocoder's canonical form of the address.
    pub formatted: String,
}

impl GeocodedAddress {
    /// Location of this address.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Capability to remember geocoding results.
pub trait GeocodeCache {
    /// Returns the cached result for `address`, if any.
    fn lookup(&self, address: &str) -> Option<GeocodedAddress>;

    /// Remembers the result for `address`, replacing any previous entry.
    fn store(&mut self, address: &str, value: GeocodedAddress);
}

/// In-memory cache keyed by the exact address string.
///
/// # Examples
///
/// ```
/// use dayroute::geocache::{GeocodeCache, GeocodedAddress, MemoryGeocodeCache};
///
/// let mut cache = MemoryGeocodeCache::new();
/// assert!(cache.lookup("1 Main St").is_none());
///
/// cache.store("1 Main St", GeocodedAddress {
///     lat: 34.05,
///     lng: -118.44,
///     formatted: "1 Main St, Los Angeles, CA".to_string(),
/// });
/// assert_eq!(cache.lookup("1 Main St").unwrap().lat, 34.05);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryGeocodeCache {
    entries: HashMap<String, GeocodedAddress>,
}

impl MemoryGeocodeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GeocodeCache for MemoryGeocodeCache {
    fn lookup(&self, address: &str) -> Option<GeocodedAddress> {
        self.entries.get(address).cloned()
    }

    fn store(&mut self, address: &str, value: GeocodedAddress) {
        self.entries.insert(address.to_string(), value);
    }
}
