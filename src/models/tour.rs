//! Tour: a route together with its length.

use super::Route;

/// A closed tour and its total length.
///
/// This is the `(route, cost)` record returned by every construction
/// heuristic, the ant colony, and 2-opt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Visiting order, closed at both ends.
    pub route: Route,
    /// Sum of edge weights along `route`.
    pub cost: u64,
}

impl Tour {
    /// Pairs a route with its cost.
    pub fn new(route: Route, cost: u64) -> Self {
        Self { route, cost }
    }

    /// Splits the tour into its raw city sequence and cost.
    pub fn into_parts(self) -> (Vec<usize>, u64) {
        (self.route.into_vec(), self.cost)
    }
}
