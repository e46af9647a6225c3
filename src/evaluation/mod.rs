//! Route metrics and change reporting.
//!
//! - [`RouteMetrics`] — rounded miles, estimated minutes, clamped savings
//! - [`order_changes`] — slot-by-slot description of a reordering

mod changes;
mod metrics;

pub use changes::order_changes;
pub use metrics::{estimate_minutes, round_miles, RouteMetrics, DEFAULT_MINUTES_PER_MILE};
