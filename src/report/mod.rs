//! Algorithm comparison reports.
//!
//! - [`effectiveness`] — Mean cost, ratio to the MST bound, and 2-opt result per algorithm
//! - [`timing`] — Mean and variance of wall-clock time per algorithm
//!
//! Both run every [`Algorithm`] from the same sequence of random starts so
//! the rows are comparable. Printing and plotting are left to the caller.

mod algorithm;
mod config;
mod effectiveness;
mod timing;

pub use algorithm::Algorithm;
pub use config::BenchmarkConfig;
pub use effectiveness::{effectiveness, AlgorithmReport, EffectivenessReport};
pub use timing::{timing, TimingReport};

use rand::Rng;

/// Draws `count` uniformly random starts in `[0, n)`.
fn random_starts<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(0..n)).collect()
}
