//! Benchmark configuration.

use serde::{Deserialize, Serialize};

use crate::aco::AcoConfig;
use crate::error::{Result, TspError};
use crate::local_search::TwoOptConfig;

/// Configuration for [`effectiveness`](super::effectiveness) and
/// [`timing`](super::timing).
///
/// # Examples
///
/// ```
/// use u_tsp::report::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default().with_repetitions(60).with_top_k(3);
/// assert_eq!(config.repetitions, 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Runs per algorithm (at least 1).
    pub repetitions: usize,
    /// Candidate count for the probabilistic nearest neighbor.
    pub top_k: usize,
    /// Ant colony parameters; `start` is set per run and `seed` is ignored.
    pub aco: AcoConfig,
    /// 2-opt parameters for the effectiveness report.
    pub two_opt: TwoOptConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: 10,
            top_k: 2,
            aco: AcoConfig::default(),
            two_opt: TwoOptConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Sets the number of runs per algorithm.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets `top_k` for the probabilistic nearest neighbor.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the ant colony parameters.
    pub fn with_aco(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    /// Sets the 2-opt parameters.
    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Checks parameter ranges, including the nested ACO configuration.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(TspError::invalid_parameter(
                "repetitions",
                "must be at least 1",
            ));
        }
        if self.top_k == 0 {
            return Err(TspError::invalid_parameter("top_k", "must be at least 1"));
        }
        self.aco.validate()
    }
}
