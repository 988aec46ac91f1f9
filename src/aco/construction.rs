//! Per-ant tour construction.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::constructive::Walk;
use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::PheromoneMatrix;

/// Builds a tour from `start`, sampling each step with weight
/// `tau^alpha * (1/d)^beta` over the unvisited cities.
///
/// Falls back to a uniform draw when no weight is positive and finite
/// (for example after pheromone underflows to zero).
pub(crate) fn pheromone_guided_tour<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    start: usize,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Tour {
    let n = distances.size();
    let mut walk = Walk::new(distances, start);
    let mut candidates = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    while walk.remaining() > 0 {
        let current = walk.current();
        candidates.clear();
        weights.clear();
        for (j, &d) in distances.row(current).iter().enumerate() {
            if walk.visited()[j] {
                continue;
            }
            let eta = 1.0 / d.max(1) as f64;
            candidates.push(j);
            weights.push(pheromone.get(current, j).powf(alpha) * eta.powf(beta));
        }

        let pick = if candidates.len() == 1 {
            0
        } else {
            match WeightedIndex::new(&weights) {
                Ok(dist) => dist.sample(rng),
                Err(_) => rng.random_range(0..candidates.len()),
            }
        };
        walk.visit(candidates[pick]);
    }

    walk.close()
}
