//! Probabilistic nearest-neighbor constructive heuristic.
//!
//! A stochastic variant of nearest neighbor: at each step the next city is
//! drawn from the `top_k` nearest unvisited cities with probability
//! inversely proportional to distance.
//!
//! # Complexity
//!
//! O(n² log n): every step sorts the unvisited cities by distance.

use log::debug;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

use super::Walk;

/// Constructs a tour by inverse-distance sampling among the nearest
/// unvisited cities.
///
/// At each step the unvisited cities are stably sorted by distance from the
/// current city (ties keep index order) and the first `top_k` become
/// candidates; `top_k` is clamped to the number of cities remaining.
/// Candidate `i` is drawn with weight `1 / d_i`. When every candidate is at
/// distance zero the draw is uniform. A candidate at distance zero among
/// non-zero candidates gets weight zero.
///
/// The same `rng` state always yields the same tour. With `top_k == 1` the
/// result equals [`nearest_neighbor`](super::nearest_neighbor).
///
/// # Errors
///
/// [`TspError::EmptyInstance`], [`TspError::InvalidStart`], or
/// [`TspError::InvalidParameter`] if `top_k == 0`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::probabilistic_nearest_neighbor;
/// use u_tsp::random::create_rng;
///
/// let cities: Vec<City> = (0..6)
///     .map(|i| City::new(i, (i * 7 % 5) as f64 * 10.0, (i * 3 % 4) as f64 * 10.0))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// let a = probabilistic_nearest_neighbor(&dm, 0, 2, &mut create_rng(1)).unwrap();
/// let b = probabilistic_nearest_neighbor(&dm, 0, 2, &mut create_rng(1)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.route.num_cities(), 6);
/// ```
pub fn probabilistic_nearest_neighbor<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    start: usize,
    top_k: usize,
    rng: &mut R,
) -> Result<Tour> {
    distances.ensure_start(start)?;
    if top_k == 0 {
        return Err(TspError::invalid_parameter("top_k", "must be at least 1"));
    }

    let mut walk = Walk::new(distances, start);
    let mut candidates: Vec<(usize, u64)> = Vec::with_capacity(distances.size());

    while walk.remaining() > 0 {
        let current = walk.current();
        candidates.clear();
        candidates.extend(
            distances
                .row(current)
                .iter()
                .enumerate()
                .filter(|&(j, _)| !walk.visited()[j])
                .map(|(j, &d)| (j, d)),
        );
        candidates.sort_by_key(|&(_, d)| d);
        candidates.truncate(top_k);

        let next = candidates[draw_candidate(&candidates, rng)].0;
        walk.visit(next);
    }

    let tour = walk.close();
    debug!(
        "probabilistic nearest neighbor from {start} (top_k = {top_k}): {} cities, cost {}",
        distances.size(),
        tour.cost
    );
    Ok(tour)
}

/// Picks a position in `candidates` with weight `1 / d`.
fn draw_candidate<R: Rng + ?Sized>(candidates: &[(usize, u64)], rng: &mut R) -> usize {
    if candidates.len() == 1 {
        return 0;
    }
    let weights: Vec<f64> = candidates
        .iter()
        .map(|&(_, d)| if d > 0 { 1.0 / d as f64 } else { 0.0 })
        .collect();
    match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        // Every candidate sits at distance zero.
        Err(_) => rng.random_range(0..candidates.len()),
    }
}
