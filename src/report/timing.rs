//! Wall-clock comparison.

use std::time::Instant;

use log::debug;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;

use super::{random_starts, Algorithm, BenchmarkConfig};

/// Wall-clock statistics for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingReport {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Mean seconds per run.
    pub mean_seconds: f64,
    /// Population variance of seconds per run.
    pub variance_seconds: f64,
}

/// Times `config.repetitions` runs of every algorithm from shared random
/// starts.
pub fn timing<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<Vec<TimingReport>> {
    config.validate()?;
    distances.ensure_non_empty()?;

    let starts = random_starts(distances.size(), config.repetitions, rng);
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut samples = Vec::with_capacity(starts.len());
        for &start in &starts {
            let began = Instant::now();
            algorithm.run(distances, start, config, rng)?;
            samples.push(began.elapsed().as_secs_f64());
        }
        let (mean_seconds, variance_seconds) = mean_and_variance(&samples);
        debug!("{algorithm}: mean {mean_seconds:.6}s, variance {variance_seconds:.3e}");
        reports.push(TimingReport {
            algorithm,
            mean_seconds,
            variance_seconds,
        });
    }
    Ok(reports)
}

fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use crate::random::create_rng;

    #[test]
    fn test_mean_and_variance() {
        let (mean, var) = mean_and_variance(&[1.0, 2.0, 3.0, 4.0]);
        assert!((mean - 2.5).abs() < 1e-12);
        assert!((var - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_timing_rows() {
        let cities: Vec<City> = (0..8).map(|i| City::new(i, i as f64, (i * i) as f64)).collect();
        let dm = DistanceMatrix::from_cities(&cities).expect("finite");
        let config = BenchmarkConfig::default().with_repetitions(3);
        let rows = timing(&dm, &config, &mut create_rng(4)).expect("ok");
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert!(row.mean_seconds >= 0.0);
            assert!(row.variance_seconds >= 0.0);
        }
    }
}
