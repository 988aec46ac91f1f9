//! # u-tsp
//!
//! Euclidean travelling salesman heuristics: tour construction, ant colony
//! optimization, 2-opt local search, and a minimum spanning tree lower bound
//! for judging tour quality.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Route, Tour)
//! - [`distance`] — Rounded Euclidean distance matrix
//! - [`evaluation`] — Route cost evaluation
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor,
//!   Probabilistic Nearest Neighbor)
//! - [`aco`] — Ant colony optimization
//! - [`local_search`] — Local search operators (2-opt)
//! - [`spanning_tree`] — Kruskal MST lower bound and union-find
//! - [`report`] — Algorithm comparison against the MST bound
//! - [`random`] — Seeded random sources
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::City;
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::constructive::nearest_neighbor;
//! use u_tsp::local_search::two_opt_improve;
//! use u_tsp::spanning_tree::kruskal_mst;
//!
//! let cities = vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 0.0, 10.0),
//!     City::new(3, 10.0, 10.0),
//!     City::new(4, 10.0, 0.0),
//! ];
//! let dm = DistanceMatrix::from_cities(&cities).unwrap();
//!
//! let tour = nearest_neighbor(&dm, 0).unwrap();
//! let improved = two_opt_improve(&tour.route, &dm).unwrap();
//! let bound = kruskal_mst(&dm);
//! assert!(bound.cost <= improved.cost);
//! assert_eq!(improved.cost, 40);
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod random;
pub mod report;
pub mod spanning_tree;

pub use error::{Result, TspError};
