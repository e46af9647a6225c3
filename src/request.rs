//! Request type and validation at the service boundary.
//!
//! The optimizer trusts its input. Callers that receive stops from the
//! outside world decode and validate them here first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::models::{Coordinates, Stop};

/// An optimization request: the home location and today's stops in their
/// current order.
///
/// # Examples
///
/// ```
/// use dayroute::request::OptimizeRequest;
///
/// let req = OptimizeRequest::from_json(r#"{
///     "home": { "lat": 34.0585, "lng": -118.4440 },
///     "stops": [ { "id": "a", "lat": 34.0296, "lng": -118.4953, "title": "Alice" } ]
/// }"#).unwrap();
/// assert_eq!(req.stops.len(), 1);
/// assert!(req.validate(50).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub home: Coordinates,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl OptimizeRequest {
    /// Creates a request.
    pub fn new(home: Coordinates, stops: Vec<Stop>) -> Self {
        Self { home, stops }
    }

    /// Decodes a request from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks coordinates, id uniqueness, and the stop count limit.
    ///
    /// Zero or one stop is valid; the optimizer returns a trivial result.
    pub fn validate(&self, max_stops: usize) -> Result<(), RequestError> {
        if self.stops.len() > max_stops {
            return Err(RequestError::TooManyStops {
                count: self.stops.len(),
                max: max_stops,
            });
        }
        if !self.home.is_valid() {
            return Err(RequestError::InvalidHome {
                lat: self.home.lat,
                lng: self.home.lng,
            });
        }
        let mut seen = HashSet::with_capacity(self.stops.len());
        for stop in &self.stops {
            if !stop.coordinates().is_valid() {
                return Err(RequestError::InvalidStop {
                    id: stop.id.clone(),
                    lat: stop.lat,
                    lng: stop.lng,
                });
            }
            if !seen.insert(stop.id.as_str()) {
                return Err(RequestError::DuplicateStopId(stop.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stops: Vec<Stop>) -> OptimizeRequest {
        OptimizeRequest::new(Coordinates::new(34.0585, -118.4440), stops)
    }

    #[test]
    fn test_validate_ok() {
        let req = request(vec![
            Stop::new("a", 34.0296, -118.4953, "A"),
            Stop::new("b", 34.0179, -118.4105, "B"),
        ]);
        assert!(req.validate(50).is_ok());
    }

    #[test]
    fn test_validate_empty_is_ok() {
        assert!(request(Vec::new()).validate(50).is_ok());
    }

    #[test]
    fn test_validate_too_many() {
        let stops = (0..3)
            .map(|i| Stop::new(format!("s{i}"), 34.0, -118.0, "S"))
            .collect();
        assert!(matches!(
            request(stops).validate(2),
            Err(RequestError::TooManyStops { count: 3, max: 2 })
        ));
    }

    #[test]
    fn test_validate_bad_home() {
        let req = OptimizeRequest::new(Coordinates::new(f64::NAN, 0.0), Vec::new());
        assert!(matches!(
            req.validate(50),
            Err(RequestError::InvalidHome { .. })
        ));
    }

    #[test]
    fn test_validate_bad_stop() {
        let req = request(vec![Stop::new("far", 91.0, 0.0, "Nowhere")]);
        match req.validate(50) {
            Err(RequestError::InvalidStop { id, .. }) => assert_eq!(id, "far"),
            other => panic!("expected InvalidStop, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_id() {
        let req = request(vec![
            Stop::new("a", 34.0, -118.0, "A"),
            Stop::new("a", 34.1, -118.1, "A again"),
        ]);
        assert!(matches!(
            req.validate(50),
            Err(RequestError::DuplicateStopId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            OptimizeRequest::from_json(r#"{ "stops": [] }"#),
            Err(RequestError::Json(_))
        ));
    }
}
