//! Domain model types for the travelling salesman problem.
//!
//! Cities carry coordinates and a display label, routes are validated closed
//! tours over city indices, and a [`Tour`] pairs a route with its length.

mod city;
mod route;
mod tour;

pub use city::City;
pub use route::Route;
pub use tour::Tour;
