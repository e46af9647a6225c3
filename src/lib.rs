//! # dayroute
//!
//! Daily appointment route optimization: given a home location and the
//! day's geocoded stops in their current order, find a shorter round trip
//! and report the driving time and distance it saves.
//!
//! The engine is pure and synchronous. It does not guarantee a globally
//! optimal tour; it is a heuristic sized for a few dozen stops.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, Point, Route, OptimizationResult)
//! - [`distance`] — Haversine distance and the all-pairs distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement
//! - [`evaluation`] — Time estimates, savings, and order-change lines
//! - [`optimizer`] — The end-to-end pipeline
//! - [`request`] — Request decoding and validation at the service boundary
//! - [`config`] — Optimizer configuration
//! - [`schedule`] — Sequence numbers for writing an accepted order back
//! - [`geocache`] — Injectable address-to-coordinate cache

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod geocache;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod request;
pub mod schedule;

pub use error::{ConfigError, RequestError};
pub use optimizer::{optimize_route, RouteOptimizer};
