//! Incremental tour construction state shared by the constructive heuristics.

use crate::distance::DistanceMatrix;
use crate::models::{Route, Tour};

/// A partially built tour: visited flags, visiting order and running cost.
pub(crate) struct Walk<'a> {
    distances: &'a DistanceMatrix,
    visited: Vec<bool>,
    order: Vec<usize>,
    cost: u64,
}

impl<'a> Walk<'a> {
    /// Starts a walk at `start`. The caller has validated `start`.
    pub(crate) fn new(distances: &'a DistanceMatrix, start: usize) -> Self {
        let n = distances.size();
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut order = Vec::with_capacity(n + 1);
        order.push(start);
        Self {
            distances,
            visited,
            order,
            cost: 0,
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.order[self.order.len() - 1]
    }

    pub(crate) fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Number of cities still to visit.
    pub(crate) fn remaining(&self) -> usize {
        self.distances.size() - self.order.len()
    }

    /// Moves to `next`, which must be unvisited.
    pub(crate) fn visit(&mut self, next: usize) {
        debug_assert!(!self.visited[next]);
        self.cost += self.distances.get(self.current(), next);
        self.visited[next] = true;
        self.order.push(next);
    }

    /// Returns to the start city and yields the closed tour.
    pub(crate) fn close(mut self) -> Tour {
        debug_assert_eq!(self.remaining(), 0);
        let start = self.order[0];
        self.cost += self.distances.get(self.current(), start);
        self.order.push(start);
        Tour::new(Route::from_closed(self.order), self.cost)
    }
}
