//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluation::DEFAULT_MINUTES_PER_MILE;
use crate::local_search::{TwoOptSettings, DEFAULT_MAX_PASSES, DEFAULT_TOLERANCE};

/// Default per-call stop limit enforced at the request boundary.
pub const DEFAULT_MAX_STOPS: usize = 50;

/// Settings shared by every optimization call.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use dayroute::config::OptimizerConfig;
///
/// let config = OptimizerConfig::from_json(r#"{ "max_stops": 20 }"#).unwrap();
/// assert_eq!(config.max_stops, 20);
/// assert_eq!(config.minutes_per_mile, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Requests with more stops than this are rejected.
    pub max_stops: usize,
    /// Cap on 2-opt passes; `null` leaves the search unbounded.
    pub max_passes: Option<usize>,
    /// Minimum saving, in miles, for a 2-opt move to be applied.
    pub improvement_tolerance: f64,
    /// Driving minutes per mile used for time estimates.
    pub minutes_per_mile: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
            max_passes: Some(DEFAULT_MAX_PASSES),
            improvement_tolerance: DEFAULT_TOLERANCE,
            minutes_per_mile: DEFAULT_MINUTES_PER_MILE,
        }
    }
}

impl OptimizerConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stops == 0 {
            return Err(ConfigError::ZeroMaxStops);
        }
        if self.max_passes == Some(0) {
            return Err(ConfigError::ZeroMaxPasses);
        }
        if !self.improvement_tolerance.is_finite() || self.improvement_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.improvement_tolerance));
        }
        if !self.minutes_per_mile.is_finite() || self.minutes_per_mile <= 0.0 {
            return Err(ConfigError::InvalidMinutesPerMile(self.minutes_per_mile));
        }
        Ok(())
    }

    /// The 2-opt settings implied by this configuration.
    pub fn two_opt(&self) -> TwoOptSettings {
        TwoOptSettings {
            tolerance: self.improvement_tolerance,
            max_passes: self.max_passes,
        }
    }
}
