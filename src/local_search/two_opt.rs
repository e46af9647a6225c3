//! Home-anchored 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < j <= len - 1` in the route, compare
//! the two edges entering positions `i` and `j` against the edges produced
//! by reversing the segment `r[i..j)`:
//!
//! ```text
//! before = d(r[i-1], r[i])   + d(r[j-1], r[j])
//! after  = d(r[i-1], r[j-1]) + d(r[i],   r[j])
//! ```
//!
//! If `after < before - tolerance`, reverse the segment in place and keep
//! scanning (first-improvement strategy). Passes repeat until one makes no
//! move. The reversed slice never includes position `0` or `len - 1`, so
//! both home anchors stay put.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, warn};

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Minimum saving, in miles, for a reversal to count as an improvement.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default cap on full improvement passes.
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// Tuning knobs for [`two_opt_improve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptSettings {
    /// A move is applied only if it shortens the tour by more than this.
    pub tolerance: f64,
    /// Stop after this many passes even if not converged. `None` = unbounded.
    pub max_passes: Option<usize>,
}

impl Default for TwoOptSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_passes: Some(DEFAULT_MAX_PASSES),
        }
    }
}

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The improved route.
    pub route: Route,
    /// Full passes performed, including the final non-improving one.
    pub passes: usize,
    /// Reversals applied.
    pub moves: usize,
    /// `true` if the last pass found no improving move.
    pub converged: bool,
}

/// Applies 2-opt improvement to a home-anchored route.
///
/// The returned route is never longer than the input.
///
/// # Examples
///
/// ```
/// use dayroute::distance::DistanceMatrix;
/// use dayroute::local_search::{two_opt_improve, TwoOptSettings};
/// use dayroute::models::Route;
///
/// // home, stops at 1, 2 and 3 miles along a line, home again
/// let pos = [0.0_f64, 1.0, 2.0, 3.0, 0.0];
/// let data = pos.iter().flat_map(|a| pos.iter().map(move |b| (a - b).abs())).collect();
/// let dm = DistanceMatrix::from_data(5, data).unwrap();
///
/// // Zigzag order: 1, 3, 2
/// let start = Route::from_indices(vec![0, 1, 3, 2, 4]).unwrap();
/// let outcome = two_opt_improve(&start, &dm, &TwoOptSettings::default());
/// assert!(outcome.converged);
/// assert!(outcome.route.total_distance(&dm) <= start.total_distance(&dm));
/// ```
pub fn two_opt_improve(
    route: &Route,
    distances: &DistanceMatrix,
    settings: &TwoOptSettings,
) -> TwoOptOutcome {
    let mut current = route.clone();
    let len = current.len();
    let mut passes = 0;
    let mut moves = 0;

    // Fewer than two stops leaves nothing to reverse.
    if len < 4 {
        return TwoOptOutcome {
            route: current,
            passes,
            moves,
            converged: true,
        };
    }

    loop {
        if settings.max_passes.is_some_and(|cap| passes >= cap) {
            warn!("2-opt stopped after {passes} passes without converging ({moves} moves)");
            return TwoOptOutcome {
                route: current,
                passes,
                moves,
                converged: false,
            };
        }
        passes += 1;

        let mut improved = false;
        let r = current.indices_mut();
        for i in 1..len - 1 {
            for j in i + 1..len {
                let delta = two_opt_delta(r, distances, i, j);
                if delta < -settings.tolerance {
                    r[i..j].reverse();
                    improved = true;
                    moves += 1;
                }
            }
        }

        if !improved {
            break;
        }
    }

    debug!("2-opt converged after {passes} passes ({moves} moves)");
    TwoOptOutcome {
        route: current,
        passes,
        moves,
        converged: true,
    }
}

/// Computes the distance change from reversing `route[i..j)`.
///
/// Before: ... - r[i-1] - r[i] - ... - r[j-1] - r[j] - ...
/// After:  ... - r[i-1] - r[j-1] - ... - r[i] - r[j] - ...
fn two_opt_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let old_cost = distances.get(route[i - 1], route[i]) + distances.get(route[j - 1], route[j]);
    let new_cost =
        distances.get(route[i - 1], route[j - 1]) + distances.get(route[i], route[j]);
    new_cost - old_cost
}
