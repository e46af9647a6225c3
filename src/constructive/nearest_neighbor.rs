//! Nearest-neighbor constructive heuristic.
//!
//! Builds the starting tour greedily: leaving home, always drive to the
//! closest stop not yet visited, then return home.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! The simplest tour construction for TSP. Tours are typically 15-25% above
//! optimal, which 2-opt then tightens.

use log::trace;

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Constructs a home-anchored tour using the nearest-neighbor heuristic.
///
/// The matrix is laid out as `[home, stop_1, ..., stop_n, home]`: index `0`
/// is the start and the last index is the return anchor, which is never
/// chosen as a stop. Candidates are scanned in ascending index order and
/// only a strictly shorter distance replaces the current best, so ties go
/// to the stop supplied first.
///
/// # Examples
///
/// ```
/// use dayroute::distance::DistanceMatrix;
/// use dayroute::constructive::nearest_neighbor;
///
/// // home, stops at 1, 3 and 2 miles along a line, home again
/// let dm = DistanceMatrix::from_data(5, vec![
///     0.0, 1.0, 3.0, 2.0, 0.0,
///     1.0, 0.0, 2.0, 1.0, 1.0,
///     3.0, 2.0, 0.0, 1.0, 3.0,
///     2.0, 1.0, 1.0, 0.0, 2.0,
///     0.0, 1.0, 3.0, 2.0, 0.0,
/// ]).unwrap();
///
/// let route = nearest_neighbor(&dm);
/// assert_eq!(route.indices(), &[0, 1, 3, 2, 4]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Route {
    let n = distances.size();
    if n < 2 {
        return Route::identity(0);
    }
    let end = n - 1;

    let mut visited = vec![false; end];
    visited[0] = true; // home

    let mut indices = Vec::with_capacity(n);
    indices.push(0);
    let mut current = 0;

    loop {
        let candidates: Vec<usize> = (1..end).filter(|&i| !visited[i]).collect();
        match distances.nearest_neighbor(current, &candidates) {
            Some(next) => {
                trace!(
                    "nearest neighbor: {current} -> {next} ({:.3} mi)",
                    distances.get(current, next)
                );
                visited[next] = true;
                indices.push(next);
                current = next;
            }
            None => break,
        }
    }

    indices.push(end);
    Route::from_indices(indices).unwrap_or_else(|| Route::identity(end - 1))
}
