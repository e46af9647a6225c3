//! Home-anchored visiting order.

use crate::distance::DistanceMatrix;

/// An ordered sequence of matrix indices that starts and ends at home.
///
/// The point list behind the matrix is `[home, stop_1, ..., stop_n, home]`,
/// so index `0` is the departure anchor and index `n + 1` the return anchor.
/// Every stop index `1..=n` appears exactly once between them.
///
/// # Examples
///
/// ```
/// use dayroute::models::Route;
///
/// let route = Route::identity(3);
/// assert_eq!(route.indices(), &[0, 1, 2, 3, 4]);
/// assert_eq!(route.stops(), &[1, 2, 3]);
/// assert_eq!(route.num_stops(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    /// The route visiting stops in the order they were supplied.
    pub fn identity(num_stops: usize) -> Self {
        Self {
            indices: (0..num_stops + 2).collect(),
        }
    }

    /// Builds a route from raw indices.
    ///
    /// Returns `None` unless the sequence begins at `0`, ends at
    /// `len - 1`, and visits each index in between exactly once.
    pub fn from_indices(indices: Vec<usize>) -> Option<Self> {
        let len = indices.len();
        if len < 2 || indices[0] != 0 || indices[len - 1] != len - 1 {
            return None;
        }
        let mut seen = vec![false; len];
        for &idx in &indices[1..len - 1] {
            if idx == 0 || idx >= len - 1 || seen[idx] {
                return None;
            }
            seen[idx] = true;
        }
        Some(Self { indices })
    }

    /// All indices, anchors included.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Mutable access for in-place local search moves.
    pub(crate) fn indices_mut(&mut self) -> &mut [usize] {
        &mut self.indices
    }

    /// Stop indices in visiting order, anchors excluded.
    pub fn stops(&self) -> &[usize] {
        &self.indices[1..self.indices.len() - 1]
    }

    /// Number of stops visited.
    pub fn num_stops(&self) -> usize {
        self.indices.len() - 2
    }

    /// Number of positions, anchors included.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no stops are visited.
    pub fn is_empty(&self) -> bool {
        self.num_stops() == 0
    }

    /// Sum of consecutive edge distances, including the return home.
    pub fn total_distance(&self, distances: &DistanceMatrix) -> f64 {
        self.indices
            .windows(2)
            .map(|edge| distances.get(edge[0], edge[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_identity_empty() {
        let r = Route::identity(0);
        assert_eq!(r.indices(), &[0, 1]);
        assert!(r.is_empty());
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_route_from_indices_valid() {
        let r = Route::from_indices(vec![0, 2, 3, 1, 4]).expect("valid");
        assert_eq!(r.stops(), &[2, 3, 1]);
    }

    #[test]
    fn test_route_from_indices_invalid() {
        assert!(Route::from_indices(vec![]).is_none());
        assert!(Route::from_indices(vec![1, 0, 2]).is_none());
        assert!(Route::from_indices(vec![0, 1, 1]).is_none());
        assert!(Route::from_indices(vec![0, 1, 1, 3]).is_none());
        assert!(Route::from_indices(vec![0, 3, 1, 3]).is_none());
        assert!(Route::from_indices(vec![0, 0, 1, 3]).is_none());
    }

    #[test]
    fn test_route_total_distance() {
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 2.0, 0.0, //
                1.0, 0.0, 1.5, 1.0, //
                2.0, 1.5, 0.0, 2.0, //
                0.0, 1.0, 2.0, 0.0,
            ],
        )
        .expect("valid");
        let r = Route::identity(2);
        // 0→1 + 1→2 + 2→3 = 1 + 1.5 + 2
        assert!((r.total_distance(&dm) - 4.5).abs() < 1e-10);
    }
}
