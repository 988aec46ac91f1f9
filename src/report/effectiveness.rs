//! Solution-quality comparison against the MST lower bound.

use log::debug;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::local_search::two_opt_improve_with;
use crate::models::Tour;
use crate::spanning_tree::kruskal_mst;

use super::{random_starts, Algorithm, BenchmarkConfig};

/// Quality figures for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmReport {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Mean tour cost over the repetitions.
    pub mean_cost: f64,
    /// Cheapest tour over the repetitions.
    pub best: Tour,
    /// `mean_cost / mst_cost`; `None` when the MST has zero cost.
    pub mst_ratio: Option<f64>,
    /// `best` after 2-opt.
    pub two_opt: Tour,
    /// `two_opt.cost / mst_cost`; `None` when the MST has zero cost.
    pub two_opt_mst_ratio: Option<f64>,
}

/// Effectiveness of every algorithm on one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessReport {
    /// Kruskal MST cost, the lower bound used for the ratios.
    pub mst_cost: u64,
    /// One row per algorithm, in [`Algorithm::ALL`] order.
    pub algorithms: Vec<AlgorithmReport>,
}

/// Runs every algorithm `config.repetitions` times from shared random starts
/// and compares the results with the MST lower bound.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::report::{effectiveness, BenchmarkConfig};
/// use u_tsp::random::create_rng;
///
/// let cities: Vec<City> = (0..10)
///     .map(|i| City::new(i, (i * 17 % 11) as f64 * 5.0, (i * 7 % 13) as f64 * 5.0))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// let config = BenchmarkConfig::default().with_repetitions(3);
/// let report = effectiveness(&dm, &config, &mut create_rng(0)).unwrap();
/// assert_eq!(report.algorithms.len(), 3);
/// for row in &report.algorithms {
///     assert!(row.two_opt.cost <= row.best.cost);
///     assert!(report.mst_cost <= row.two_opt.cost);
/// }
/// ```
pub fn effectiveness<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<EffectivenessReport> {
    config.validate()?;
    distances.ensure_non_empty()?;

    let mst_cost = kruskal_mst(distances).cost;
    let starts = random_starts(distances.size(), config.repetitions, rng);
    let ratio = |cost: f64| (mst_cost > 0).then(|| cost / mst_cost as f64);

    let mut algorithms = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut total: u64 = 0;
        let mut best: Option<Tour> = None;
        for &start in &starts {
            let tour = algorithm.run(distances, start, config, rng)?;
            total += tour.cost;
            if best.as_ref().is_none_or(|b| tour.cost < b.cost) {
                best = Some(tour);
            }
        }
        let Some(best) = best else { continue };

        let mean_cost = total as f64 / starts.len() as f64;
        let two_opt = two_opt_improve_with(&best.route, distances, &config.two_opt)?;
        debug!(
            "{algorithm}: mean {mean_cost:.1}, best {}, 2-opt {}, MST {mst_cost}",
            best.cost, two_opt.cost
        );
        algorithms.push(AlgorithmReport {
            algorithm,
            mean_cost,
            mst_ratio: ratio(mean_cost),
            two_opt_mst_ratio: ratio(two_opt.cost as f64),
            best,
            two_opt,
        });
    }

    Ok(EffectivenessReport {
        mst_cost,
        algorithms,
    })
}
