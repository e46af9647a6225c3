//! Errors raised at the request and configuration boundary.
//!
//! The optimizer itself is total over valid input and has no error path;
//! everything here is detected before it runs.

use thiserror::Error;

/// Why an optimization request was rejected.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The home location is NaN, infinite, or out of range.
    #[error("home coordinates ({lat}, {lng}) are not a valid location")]
    InvalidHome { lat: f64, lng: f64 },
    /// A stop location is NaN, infinite, or out of range.
    #[error("stop {id:?} has invalid coordinates ({lat}, {lng})")]
    InvalidStop { id: String, lat: f64, lng: f64 },
    /// Two stops share an id, so the result order would be ambiguous.
    #[error("stop id {0:?} appears more than once")]
    DuplicateStopId(String),
    /// More stops than the configured per-call limit.
    #[error("{count} stops exceeds the limit of {max}")]
    TooManyStops { count: usize, max: usize },
    /// The request body could not be decoded.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an optimizer configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_stops must be greater than zero")]
    ZeroMaxStops,
    #[error("max_passes must be greater than zero when supplied")]
    ZeroMaxPasses,
    #[error("improvement_tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("minutes_per_mile must be finite and positive, got {0}")]
    InvalidMinutesPerMile(f64),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
