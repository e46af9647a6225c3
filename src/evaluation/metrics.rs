//! Distance-to-time conversion and savings.

/// Minutes of driving per mile (about 24 mph in city traffic).
pub const DEFAULT_MINUTES_PER_MILE: f64 = 2.5;

/// Estimated driving minutes for a distance, rounded to the nearest minute.
///
/// # Examples
///
/// ```
/// use dayroute::evaluation::{estimate_minutes, DEFAULT_MINUTES_PER_MILE};
///
/// assert_eq!(estimate_minutes(18.03, DEFAULT_MINUTES_PER_MILE), 45);
/// assert_eq!(estimate_minutes(0.0, DEFAULT_MINUTES_PER_MILE), 0);
/// ```
pub fn estimate_minutes(miles: f64, minutes_per_mile: f64) -> u32 {
    (miles * minutes_per_mile).round().max(0.0) as u32
}

/// Rounds a distance to one decimal place.
pub fn round_miles(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Before/after comparison of a route, ready for reporting.
///
/// Minutes are estimated from the unrounded miles; savings are clamped so
/// they never go negative, even when the caller's order was already
/// shorter than the optimized one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub original_miles: f64,
    pub optimized_miles: f64,
    pub original_minutes: u32,
    pub optimized_minutes: u32,
    pub savings_minutes: u32,
    pub savings_miles: f64,
}

impl RouteMetrics {
    /// Compares the original and optimized tour lengths (in miles).
    pub fn compare(original_miles: f64, optimized_miles: f64, minutes_per_mile: f64) -> Self {
        let original_minutes = estimate_minutes(original_miles, minutes_per_mile);
        let optimized_minutes = estimate_minutes(optimized_miles, minutes_per_mile);
        Self {
            original_miles: round_miles(original_miles),
            optimized_miles: round_miles(optimized_miles),
            original_minutes,
            optimized_minutes,
            savings_minutes: original_minutes.saturating_sub(optimized_minutes),
            savings_miles: round_miles((original_miles - optimized_miles).max(0.0)),
        }
    }
}
