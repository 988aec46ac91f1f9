//! ACO configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// How each ant builds its tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Construction {
    /// Deterministic nearest neighbor from the ant's random start. Pheromone
    /// is accumulated but never read.
    #[default]
    NearestNeighbor,
    /// Next city drawn with weight `tau^alpha * (1/d)^beta`; a distance of
    /// zero counts as one.
    PheromoneGuided {
        /// Pheromone exponent.
        alpha: f64,
        /// Inverse-distance exponent.
        beta: f64,
    },
}

/// Configuration for [`AcoRunner`](super::AcoRunner).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_n_ants(20)
///     .with_n_iterations(50)
///     .with_rho(0.1)
///     .with_seed(42)
///     .with_time_limit(Duration::from_secs(2));
/// assert!(config.validate().is_ok());
///
/// assert!(AcoConfig::default().with_rho(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants per iteration (at least 1).
    pub n_ants: usize,
    /// Number of iterations (at least 1).
    pub n_iterations: usize,
    /// Evaporation rate in `[0, 1)`.
    pub rho: f64,
    /// City the returned tour is anchored at. Ants still pick random starts.
    pub start: Option<usize>,
    /// Tour construction rule.
    pub construction: Construction,
    /// Seed for [`AcoRunner::run`](super::AcoRunner::run); `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock budget, checked between ants and between iterations.
    pub time_limit: Option<Duration>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 10,
            n_iterations: 10,
            rho: 0.05,
            start: None,
            construction: Construction::NearestNeighbor,
            seed: None,
            time_limit: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_n_ants(mut self, n_ants: usize) -> Self {
        self.n_ants = n_ants;
        self
    }

    /// Sets the number of iterations.
    pub fn with_n_iterations(mut self, n_iterations: usize) -> Self {
        self.n_iterations = n_iterations;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Anchors the returned tour at `start`.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the construction rule.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.n_ants == 0 {
            return Err(TspError::invalid_parameter("n_ants", "must be at least 1"));
        }
        if self.n_iterations == 0 {
            return Err(TspError::invalid_parameter(
                "n_iterations",
                "must be at least 1",
            ));
        }
        if !(0.0..1.0).contains(&self.rho) {
            return Err(TspError::invalid_parameter(
                "rho",
                format!("must be in [0, 1), got {}", self.rho),
            ));
        }
        if let Construction::PheromoneGuided { alpha, beta } = self.construction {
            for (name, value) in [("alpha", alpha), ("beta", beta)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(TspError::invalid_parameter(
                        name,
                        format!("must be finite and non-negative, got {value}"),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AcoConfig::default();
        assert_eq!(config.n_ants, 10);
        assert_eq!(config.n_iterations, 10);
        assert!((config.rho - 0.05).abs() < 1e-12);
        assert_eq!(config.construction, Construction::NearestNeighbor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert!(matches!(
            AcoConfig::default().with_n_ants(0).validate(),
            Err(TspError::InvalidParameter { name: "n_ants", .. })
        ));
        assert!(matches!(
            AcoConfig::default().with_n_iterations(0).validate(),
            Err(TspError::InvalidParameter { name: "n_iterations", .. })
        ));
    }

    #[test]
    fn test_rho_range() {
        assert!(AcoConfig::default().with_rho(0.0).validate().is_ok());
        assert!(AcoConfig::default().with_rho(0.999).validate().is_ok());
        assert!(AcoConfig::default().with_rho(1.0).validate().is_err());
        assert!(AcoConfig::default().with_rho(-0.1).validate().is_err());
        assert!(AcoConfig::default().with_rho(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_guided_exponents() {
        let ok = Construction::PheromoneGuided { alpha: 1.0, beta: 2.0 };
        assert!(AcoConfig::default().with_construction(ok).validate().is_ok());
        let bad = Construction::PheromoneGuided { alpha: -1.0, beta: 2.0 };
        assert!(matches!(
            AcoConfig::default().with_construction(bad).validate(),
            Err(TspError::InvalidParameter { name: "alpha", .. })
        ));
    }
}
