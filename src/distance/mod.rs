//! Great-circle distances and the all-pairs distance matrix.

mod haversine;
mod matrix;

pub use haversine::{haversine_miles, EARTH_RADIUS_MILES};
pub use matrix::DistanceMatrix;
