//! Constructive heuristics for building tours from scratch.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`probabilistic_nearest_neighbor`] — Inverse-distance sampling among
//!   the `top_k` nearest unvisited cities, O(n² log n)

mod nearest_neighbor;
mod probabilistic;
mod walk;

pub use nearest_neighbor::nearest_neighbor;
pub use probabilistic::probabilistic_nearest_neighbor;

pub(crate) use nearest_neighbor::nearest_neighbor_unchecked;
pub(crate) use walk::Walk;
