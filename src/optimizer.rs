//! The end-to-end optimization pipeline.
//!
//! ```text
//! stops ─► distance matrix ─► nearest neighbor ─► 2-opt ─► metrics + changes
//! ```
//!
//! Each call builds its own matrix and working route and keeps nothing
//! afterwards, so a single [`RouteOptimizer`] can be shared across threads.

use std::iter;

use log::debug;

use crate::config::OptimizerConfig;
use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{ConfigError, RequestError};
use crate::evaluation::{order_changes, RouteMetrics};
use crate::local_search::two_opt_improve;
use crate::models::{Coordinates, OptimizationResult, Point, Route, Stop};
use crate::request::OptimizeRequest;

/// Reorders a day's stops to shorten the round trip from home.
///
/// # Examples
///
/// ```
/// use dayroute::models::{Coordinates, Stop};
/// use dayroute::optimizer::RouteOptimizer;
///
/// let home = Coordinates::new(34.0585, -118.4440);
/// let stops = vec![
///     Stop::new("a", 34.0296, -118.4953, "Alice"),
///     Stop::new("b", 34.0179, -118.4105, "Bob"),
///     Stop::new("c", 34.0367, -118.5067, "Carol"),
/// ];
///
/// let result = RouteOptimizer::default().optimize(home, &stops);
/// assert_eq!(result.optimized_order, vec!["b", "a", "c"]);
/// assert!(result.optimized_miles <= result.original_miles);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer after validating its configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes the visiting order of `stops`, starting and ending at `home`.
    ///
    /// The order of `stops` is the caller's current order and the baseline
    /// for savings. Coordinates must be finite and in range; use
    /// [`RouteOptimizer::optimize_request`] for untrusted input.
    pub fn optimize(&self, home: Coordinates, stops: &[Stop]) -> OptimizationResult {
        let original_ids: Vec<String> = stops.iter().map(|s| s.id.clone()).collect();
        if stops.len() <= 1 {
            debug!("{} stop(s), nothing to reorder", stops.len());
            return OptimizationResult::trivial(original_ids);
        }

        let points: Vec<Point> = iter::once(Point::home(home))
            .chain(stops.iter().map(Point::from))
            .chain(iter::once(Point::home(home)))
            .collect();
        let distances = DistanceMatrix::from_points(&points);

        let original = Route::identity(stops.len());
        let original_miles = original.total_distance(&distances);

        let initial = nearest_neighbor(&distances);
        let initial_miles = initial.total_distance(&distances);
        let outcome = two_opt_improve(&initial, &distances, &self.config.two_opt());
        let optimized_miles = outcome.route.total_distance(&distances);
        debug!(
            "{} stops: original {original_miles:.3} mi, nearest neighbor {initial_miles:.3} mi, \
             2-opt {optimized_miles:.3} mi ({} moves, {} passes)",
            stops.len(),
            outcome.moves,
            outcome.passes
        );

        let optimized_ids: Vec<String> = outcome
            .route
            .stops()
            .iter()
            .map(|&idx| stops[idx - 1].id.clone())
            .collect();

        let metrics = RouteMetrics::compare(
            original_miles,
            optimized_miles,
            self.config.minutes_per_mile,
        );
        let swaps = order_changes(stops, &optimized_ids);

        OptimizationResult {
            original_order: original_ids,
            optimized_order: optimized_ids,
            original_miles: metrics.original_miles,
            optimized_miles: metrics.optimized_miles,
            original_minutes: metrics.original_minutes,
            optimized_minutes: metrics.optimized_minutes,
            savings_minutes: metrics.savings_minutes,
            savings_miles: metrics.savings_miles,
            swaps,
        }
    }

    /// Validates a request against this configuration, then optimizes it.
    pub fn optimize_request(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationResult, RequestError> {
        request.validate(self.config.max_stops)?;
        Ok(self.optimize(request.home, &request.stops))
    }

    /// Decodes, validates, and optimizes a JSON request.
    pub fn optimize_json(&self, json: &str) -> Result<OptimizationResult, RequestError> {
        let request = OptimizeRequest::from_json(json)?;
        self.optimize_request(&request)
    }
}

/// Optimizes with the default configuration.
///
/// Shorthand for `RouteOptimizer::default().optimize(home, stops)`.
pub fn optimize_route(home: Coordinates, stops: &[Stop]) -> OptimizationResult {
    RouteOptimizer::default().optimize(home, stops)
}
