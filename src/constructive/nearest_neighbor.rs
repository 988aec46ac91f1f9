//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given city, always move to the
//! nearest unvisited city, then return to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

use super::Walk;

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// Ties are broken by lowest city index. The result is fully deterministic
/// for a given matrix and start; callers without a preferred start
/// conventionally pass `0`.
///
/// # Errors
///
/// [`TspError::EmptyInstance`](crate::error::TspError::EmptyInstance) if the
/// matrix is empty, [`TspError::InvalidStart`](crate::error::TspError::InvalidStart)
/// if `start` is not a city index.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.route.as_slice(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost, 40);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    distances.ensure_start(start)?;
    let tour = nearest_neighbor_unchecked(distances, start);
    debug!(
        "nearest neighbor from {start}: {} cities, cost {}",
        distances.size(),
        tour.cost
    );
    Ok(tour)
}

/// Nearest-neighbor construction for a start already known to be valid.
pub(crate) fn nearest_neighbor_unchecked(distances: &DistanceMatrix, start: usize) -> Tour {
    let mut walk = Walk::new(distances, start);
    while let Some(next) = distances.nearest_unvisited(walk.current(), walk.visited()) {
        walk.visit(next);
    }
    walk.close()
}
