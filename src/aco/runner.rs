//! ACO runner.
//!
//! # Algorithm
//!
//! Each iteration:
//!
//! 1. Every ant picks a uniformly random start and builds a tour.
//! 2. All pheromone entries are multiplied by `1 - rho`.
//! 3. Every ant deposits `1 / cost` on each directed edge of its tour.
//! 4. The iteration's cheapest tour replaces the best-so-far if strictly better.
//!
//! # Complexity
//!
//! O(n_iterations × (n_ants × n² + n²)).
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics, Part B* 26(1), 29-41.

use std::time::Instant;

use log::{debug, trace};
use rand::Rng;

use crate::constructive::nearest_neighbor_unchecked;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;
use crate::random::rng_from_option;

use super::construction::pheromone_guided_tour;
use super::{AcoConfig, Construction, PheromoneMatrix};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Cheapest tour found, anchored at the configured start if any.
    pub best: Tour,
    /// Iterations that ran to completion of their deposit step.
    pub iterations_run: usize,
    /// Best-so-far cost after each completed iteration.
    pub history: Vec<u64>,
    /// Pheromone levels at the end of the run.
    pub pheromone: PheromoneMatrix,
}

/// Runs ant colony optimization over a distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::aco::{AcoConfig, AcoRunner};
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| City::new(i, (i * 13 % 7) as f64 * 10.0, (i * 5 % 3) as f64 * 10.0))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// let config = AcoConfig::default().with_n_ants(5).with_n_iterations(4).with_seed(1);
/// let result = AcoRunner::run(&dm, &config).unwrap();
/// assert_eq!(result.best.route.num_cities(), 8);
/// assert_eq!(result.history.len(), 4);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs with a generator seeded from `config.seed`.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(distances, config, &mut rng)
    }

    /// Runs with a caller-supplied generator; `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyInstance`], [`TspError::InvalidParameter`] from
    /// [`AcoConfig::validate`], or [`TspError::InvalidStart`] if
    /// `config.start` is out of range.
    pub fn run_with_rng<R: Rng + ?Sized>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult> {
        config.validate()?;
        distances.ensure_non_empty()?;
        if let Some(start) = config.start {
            distances.ensure_start(start)?;
        }

        let n = distances.size();
        let deadline = config.time_limit.map(|limit| Instant::now() + limit);
        let expired = || deadline.is_some_and(|d| Instant::now() >= d);

        let mut pheromone = PheromoneMatrix::new(n, 1.0);
        let mut best: Option<Tour> = None;
        let mut history = Vec::with_capacity(config.n_iterations);
        let mut tours: Vec<Tour> = Vec::with_capacity(config.n_ants);

        for iteration in 0..config.n_iterations {
            if iteration > 0 && expired() {
                debug!("ACO time limit reached after {iteration} iterations");
                break;
            }

            tours.clear();
            for ant in 0..config.n_ants {
                if ant > 0 && expired() {
                    debug!("ACO time limit reached during iteration {iteration} after {ant} ants");
                    break;
                }
                let start = rng.random_range(0..n);
                let tour = match config.construction {
                    Construction::NearestNeighbor => nearest_neighbor_unchecked(distances, start),
                    Construction::PheromoneGuided { alpha, beta } => {
                        pheromone_guided_tour(distances, &pheromone, start, alpha, beta, rng)
                    }
                };
                tours.push(tour);
            }

            pheromone.evaporate(config.rho);
            for tour in &tours {
                pheromone.deposit(tour.route.as_slice(), deposit_amount(tour.cost));
            }

            if let Some(candidate) = tours.iter().min_by_key(|t| t.cost) {
                if best.as_ref().is_none_or(|b| candidate.cost < b.cost) {
                    best = Some(candidate.clone());
                }
            }
            let best_cost = best.as_ref().map_or(u64::MAX, |b| b.cost);
            history.push(best_cost);
            trace!(
                "ACO iteration {iteration}: {} ants, best cost {best_cost}",
                tours.len()
            );
        }

        let mut best = best.ok_or_else(|| {
            TspError::invalid_parameter("n_iterations", "no iteration completed")
        })?;
        if let Some(start) = config.start {
            best.route = best.route.rotate_to(start)?;
        }

        debug!(
            "ACO: {n} cities, {} ants, {} iterations, best cost {}",
            config.n_ants,
            history.len(),
            best.cost
        );
        Ok(AcoResult {
            best,
            iterations_run: history.len(),
            history,
            pheromone,
        })
    }
}

/// Reward `1 / cost`; a zero-length tour deposits as if it had length one.
fn deposit_amount(cost: u64) -> f64 {
    1.0 / cost.max(1) as f64
}
