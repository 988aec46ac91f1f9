//! 2-opt improvement of a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < k <= n - 1` (the anchor at position
//! 0 and n stays fixed), compute the change in length from reversing the
//! segment `route[i..=k]`:
//!
//! ```text
//! delta = d(r[i-1], r[k]) + d(r[i], r[k+1]) - d(r[i-1], r[i]) - d(r[k], r[k+1])
//! ```
//!
//! If delta < 0, reverse the segment and restart the scan (first-improvement
//! strategy). Stop when a full scan finds no improving move, or when the
//! optional scan cap is reached.
//!
//! # Complexity
//!
//! O(n²) per scan with O(1) delta evaluation; the number of scans is
//! unbounded unless capped.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::CostEvaluator;
use crate::models::{Route, Tour};

/// Configuration for [`two_opt_improve_with`].
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_passes(50);
/// assert_eq!(config.max_passes, Some(50));
/// assert_eq!(TwoOptConfig::default().max_passes, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptConfig {
    /// Maximum number of scans. `None` runs until no improving move exists.
    pub max_passes: Option<usize>,
}

impl TwoOptConfig {
    /// Caps the number of scans.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }
}

/// Applies 2-opt to a route until no improving segment reversal remains.
///
/// The returned tour starts at the same city and never costs more than the
/// input. Applying it to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Route};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// // Crossing tour: both diagonals.
/// let crossing = Route::new(vec![0, 2, 1, 3, 0], 4).unwrap();
/// let tour = two_opt_improve(&crossing, &dm).unwrap();
/// assert_eq!(tour.route.as_slice(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost, 40);
/// ```
pub fn two_opt_improve(route: &Route, distances: &DistanceMatrix) -> Result<Tour> {
    two_opt_improve_with(route, distances, &TwoOptConfig::default())
}

/// Applies 2-opt with an explicit configuration.
///
/// # Errors
///
/// [`TspError::MalformedRoute`] if the route does not cover exactly the
/// cities of `distances`.
pub fn two_opt_improve_with(
    route: &Route,
    distances: &DistanceMatrix,
    config: &TwoOptConfig,
) -> Result<Tour> {
    if route.num_cities() != distances.size() {
        return Err(TspError::malformed_route(format!(
            "route visits {} cities but the matrix has {}",
            route.num_cities(),
            distances.size()
        )));
    }

    let mut current = route.as_slice().to_vec();
    let mut cost = CostEvaluator::new(distances).cost_unchecked(&current);
    let initial_cost = cost;
    let last = current.len() - 1;
    let mut passes = 0usize;
    let mut moves = 0usize;

    'scan: loop {
        if config.max_passes.is_some_and(|max| passes >= max) {
            debug!("2-opt stopped at scan cap of {passes}");
            break;
        }
        passes += 1;

        for i in 1..last.saturating_sub(1) {
            for k in (i + 1)..last {
                let delta = two_opt_delta(&current, distances, i, k);
                if delta < 0 {
                    current[i..=k].reverse();
                    cost -= delta.unsigned_abs() as u64;
                    moves += 1;
                    trace!("2-opt reversed [{i}..={k}], delta {delta}, cost {cost}");
                    continue 'scan;
                }
            }
        }
        break;
    }

    debug!(
        "2-opt: cost {initial_cost} -> {cost} after {moves} moves in {passes} scans"
    );
    Ok(Tour::new(Route::from_closed(current), cost))
}

/// Change in tour length from reversing `route[i..=k]`.
///
/// Before: ... r[i-1] - r[i] ... r[k] - r[k+1] ...
/// After:  ... r[i-1] - r[k] ... r[i] - r[k+1] ...
fn two_opt_delta(route: &[usize], distances: &DistanceMatrix, i: usize, k: usize) -> i128 {
    let (a, b) = (route[i - 1], route[i]);
    let (c, d) = (route[k], route[k + 1]);
    let removed = distances.get(a, b) as i128 + distances.get(c, d) as i128;
    let added = distances.get(a, c) as i128 + distances.get(b, d) as i128;
    added - removed
}
