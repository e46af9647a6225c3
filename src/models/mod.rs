//! Domain model types for daily route optimization.
//!
//! Provides the core abstractions: geocoded stops and the home location,
//! the points a distance matrix is built over, home-anchored routes, and
//! the fixed-shape result record returned to callers.

mod point;
mod result;
mod route;

pub use point::{Coordinates, Point, Stop, HOME_ID};
pub use result::OptimizationResult;
pub use route::Route;
