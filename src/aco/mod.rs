//! Ant colony optimization for the TSP.
//!
//! - [`AcoConfig`] — Colony size, iteration count, evaporation, construction rule
//! - [`PheromoneMatrix`] — Edge reinforcement owned by a single run
//! - [`AcoRunner`] — Iterated construction, evaporation and deposit
//!
//! By default every ant builds its tour with plain nearest neighbor from a
//! random start and the pheromone matrix is bookkeeping only. Setting
//! [`Construction::PheromoneGuided`] makes ants sample the next city from
//! pheromone and inverse distance instead.

mod config;
mod construction;
mod pheromone;
mod runner;

pub use config::{AcoConfig, Construction};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
