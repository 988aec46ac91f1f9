//! Local search operators for improving existing tours.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal, first improvement

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_improve_with, TwoOptConfig};
