//! Algorithms compared by the reports.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aco::AcoRunner;
use crate::constructive::{nearest_neighbor, probabilistic_nearest_neighbor};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

use super::BenchmarkConfig;

/// A tour-producing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Greedy nearest neighbor.
    NearestNeighbor,
    /// Inverse-distance sampling among the `top_k` nearest.
    ProbabilisticNearestNeighbor,
    /// Ant colony optimization.
    AntColony,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::NearestNeighbor,
        Algorithm::ProbabilisticNearestNeighbor,
        Algorithm::AntColony,
    ];

    /// Short label used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "NNH",
            Algorithm::ProbabilisticNearestNeighbor => "PNNH",
            Algorithm::AntColony => "ACO",
        }
    }

    /// Runs the algorithm once from `start`.
    ///
    /// The ant colony anchors its best tour at `start`; its ants still draw
    /// their own starts from `rng`.
    pub fn run<R: Rng + ?Sized>(
        &self,
        distances: &DistanceMatrix,
        start: usize,
        config: &BenchmarkConfig,
        rng: &mut R,
    ) -> Result<Tour> {
        match self {
            Algorithm::NearestNeighbor => nearest_neighbor(distances, start),
            Algorithm::ProbabilisticNearestNeighbor => {
                probabilistic_nearest_neighbor(distances, start, config.top_k, rng)
            }
            Algorithm::AntColony => {
                let aco = config.aco.clone().with_start(start);
                AcoRunner::run_with_rng(distances, &aco, rng).map(|r| r.best)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
