//! Property tests for the distance model and the optimization pipeline.

use dayroute::config::OptimizerConfig;
use dayroute::constructive::nearest_neighbor;
use dayroute::distance::{haversine_miles, DistanceMatrix};
use dayroute::local_search::{two_opt_improve, TwoOptSettings};
use dayroute::models::{Coordinates, Point, Stop};
use dayroute::optimizer::{optimize_route, RouteOptimizer};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (-89.0f64..89.0, -179.0f64..179.0)
}

/// Stops scattered within roughly 20 miles of a city-sized home area.
fn day() -> impl Strategy<Value = (Coordinates, Vec<Stop>)> {
    let home = (33.8f64..34.2, -118.6f64..-118.2);
    let stops = prop::collection::vec((-0.3f64..0.3, -0.3f64..0.3), 0..12);
    (home, stops).prop_map(|((hlat, hlng), offsets)| {
        let stops = offsets
            .iter()
            .enumerate()
            .map(|(i, (dlat, dlng))| {
                Stop::new(format!("s{i}"), hlat + dlat, hlng + dlng, format!("Stop {i}"))
            })
            .collect();
        (Coordinates::new(hlat, hlng), stops)
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coord(), b in coord()) {
        prop_assert_eq!(haversine_miles(a.0, a.1, b.0, b.1), haversine_miles(b.0, b.1, a.0, a.1));
    }

    #[test]
    fn distance_to_self_is_zero(a in coord()) {
        prop_assert_eq!(haversine_miles(a.0, a.1, a.0, a.1), 0.0);
    }

    #[test]
    fn distance_is_non_negative(a in coord(), b in coord()) {
        let d = haversine_miles(a.0, a.1, b.0, b.1);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn two_opt_never_lengthens_nearest_neighbor((home, stops) in day()) {
        let mut points = vec![Point::home(home)];
        points.extend(stops.iter().map(Point::from));
        points.push(Point::home(home));
        let dm = DistanceMatrix::from_points(&points);

        let initial = nearest_neighbor(&dm);
        let improved = two_opt_improve(&initial, &dm, &TwoOptSettings::default()).route;
        prop_assert!(improved.total_distance(&dm) <= initial.total_distance(&dm));
        prop_assert_eq!(improved.num_stops(), stops.len());
    }

    #[test]
    fn savings_are_never_negative((home, stops) in day()) {
        let r = optimize_route(home, &stops);
        prop_assert!(r.savings_miles >= 0.0);
        prop_assert!(r.original_miles >= 0.0);
        prop_assert!(r.optimized_miles >= 0.0);
        prop_assert_eq!(
            r.savings_minutes,
            r.original_minutes.saturating_sub(r.optimized_minutes)
        );
    }

    #[test]
    fn optimized_order_is_a_permutation((home, stops) in day()) {
        let r = optimize_route(home, &stops);
        let mut original = r.original_order.clone();
        let mut optimized = r.optimized_order.clone();
        original.sort();
        optimized.sort();
        prop_assert_eq!(original, optimized);
    }

    #[test]
    fn reoptimizing_is_a_fixed_point((home, stops) in day()) {
        let first = optimize_route(home, &stops);
        let reordered: Vec<Stop> = first
            .optimized_order
            .iter()
            .filter_map(|id| stops.iter().find(|s| &s.id == id).cloned())
            .collect();
        let second = optimize_route(home, &reordered);
        prop_assert_eq!(second.savings_minutes, 0);
        prop_assert!(second.swaps.is_empty());
        prop_assert_eq!(&second.optimized_order, &first.optimized_order);
    }

    #[test]
    fn optimization_is_deterministic((home, stops) in day()) {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default()).unwrap();
        prop_assert_eq!(optimizer.optimize(home, &stops), optimizer.optimize(home, &stops));
    }
}
