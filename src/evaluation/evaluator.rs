//! Route length computation.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::{Route, Tour};

/// Sums edge weights along routes read from one distance matrix.
///
/// This is a pure summation: it checks that every index is inside the
/// matrix but does not check that the route visits every city once.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::CostEvaluator;
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 2, 7, 2, 0, 3, 7, 3, 0]).unwrap();
/// let evaluator = CostEvaluator::new(&dm);
/// assert_eq!(evaluator.cost(&[0, 1, 2, 0]).unwrap(), 12);
/// assert!(evaluator.cost(&[0, 3, 0]).is_err());
/// ```
pub struct CostEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Returns `sum(matrix[route[i]][route[i + 1]])` over consecutive pairs.
    ///
    /// Fails with [`TspError::InvalidRoute`] on the first index outside the
    /// matrix, and with [`TspError::DistanceOverflow`] if a route longer
    /// than a tour sums past `u64::MAX`. Routes with fewer than two entries
    /// cost zero.
    pub fn cost(&self, route: &[usize]) -> Result<u64> {
        let size = self.distances.size();
        if let Some(&index) = route.iter().find(|&&c| c >= size) {
            return Err(TspError::InvalidRoute { index, size });
        }
        route
            .windows(2)
            .try_fold(0u64, |acc, w| acc.checked_add(self.distances.get(w[0], w[1])))
            .ok_or(TspError::DistanceOverflow {
                size,
                max_distance: route
                    .windows(2)
                    .map(|w| self.distances.get(w[0], w[1]))
                    .max()
                    .unwrap_or(0),
            })
    }

    /// Evaluates a validated route and pairs it with its cost.
    pub fn tour(&self, route: Route) -> Result<Tour> {
        let cost = self.cost(route.as_slice())?;
        Ok(Tour::new(route, cost))
    }

    /// Sum for a tour of at most `size` edges, which cannot overflow.
    pub(crate) fn cost_unchecked(&self, route: &[usize]) -> u64 {
        route
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum()
    }
}

/// Shorthand for [`CostEvaluator::cost`].
pub fn route_cost(route: &[usize], distances: &DistanceMatrix) -> Result<u64> {
    CostEvaluator::new(distances).cost(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn square() -> DistanceMatrix {
        let cities = vec![
            City::new(1, 0.0, 0.0),
            City::new(2, 0.0, 10.0),
            City::new(3, 10.0, 10.0),
            City::new(4, 10.0, 0.0),
        ];
        DistanceMatrix::from_cities(&cities).expect("finite")
    }

    #[test]
    fn test_perimeter_cost() {
        let dm = square();
        assert_eq!(route_cost(&[0, 1, 2, 3, 0], &dm), Ok(40));
    }

    #[test]
    fn test_crossing_cost() {
        let dm = square();
        // 0→2 and 1→3 are diagonals of 14 each.
        assert_eq!(route_cost(&[0, 2, 1, 3, 0], &dm), Ok(14 + 10 + 14 + 10));
    }

    #[test]
    fn test_short_routes_cost_zero() {
        let dm = square();
        assert_eq!(route_cost(&[], &dm), Ok(0));
        assert_eq!(route_cost(&[2], &dm), Ok(0));
        assert_eq!(route_cost(&[2, 2], &dm), Ok(0));
    }

    #[test]
    fn test_does_not_check_permutation() {
        let dm = square();
        assert_eq!(route_cost(&[0, 1, 0, 1], &dm), Ok(30));
    }

    #[test]
    fn test_long_walk_overflow_is_an_error() {
        let edge = u64::MAX / 2;
        let dm = DistanceMatrix::from_data(2, vec![0, edge, edge, 0]).expect("fits");
        assert_eq!(route_cost(&[0, 1, 0], &dm), Ok(2 * edge));
        assert_eq!(
            route_cost(&[0, 1, 0, 1], &dm),
            Err(TspError::DistanceOverflow {
                size: 2,
                max_distance: edge,
            })
        );
    }

    #[test]
    fn test_out_of_range() {
        let dm = square();
        assert_eq!(
            route_cost(&[0, 1, 4, 0], &dm),
            Err(TspError::InvalidRoute { index: 4, size: 4 })
        );
    }

    #[test]
    fn test_tour() {
        let dm = square();
        let route = Route::new(vec![3, 2, 1, 0, 3], 4).expect("valid");
        let tour = CostEvaluator::new(&dm).tour(route).expect("in range");
        assert_eq!(tour.cost, 40);
        assert_eq!(tour.route.start(), 3);
    }
}
