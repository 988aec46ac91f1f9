//! Kruskal minimum spanning tree.
//!
//! The MST of the complete distance graph is a lower bound on any tour:
//! removing one edge from a tour leaves a spanning path, which costs at
//! least as much as the MST.
//!
//! # Complexity
//!
//! O(n² log n) for sorting the n(n-1)/2 edges.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proceedings of the AMS* 7(1), 48-50.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

use super::DisjointSet;

/// Result of [`kruskal_mst`]: total weight and selected edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// Sum of the selected edge weights.
    pub cost: u64,
    /// Selected edges `(i, j)` with `i < j`, in the order they were added.
    pub edges: Vec<(usize, usize)>,
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are all pairs `(i, j)` with `i < j`, stably sorted by weight so
/// that ties keep lexicographic `(i, j)` order. An instance of `n` cities
/// yields `n - 1` edges; empty and single-city instances yield none.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::spanning_tree::kruskal_mst;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
///
/// let mst = kruskal_mst(&dm);
/// assert_eq!(mst.cost, 30);
/// assert_eq!(mst.edges, vec![(0, 1), (0, 3), (1, 2)]);
/// ```
pub fn kruskal_mst(distances: &DistanceMatrix) -> SpanningTree {
    let n = distances.size();
    let mut candidates: Vec<(usize, usize, u64)> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            candidates.push((i, j, distances.get(i, j)));
        }
    }
    candidates.sort_by_key(|&(_, _, w)| w);

    let mut components = DisjointSet::new(n);
    let mut cost = 0;
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for (i, j, w) in candidates {
        if components.union(i, j) {
            cost += w;
            edges.push((i, j));
            if edges.len() + 1 == n {
                break;
            }
        }
    }

    debug!("kruskal MST: {n} cities, {} edges, cost {cost}", edges.len());
    SpanningTree { cost, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    #[test]
    fn test_mst_line() {
        let cities: Vec<City> = (0..5).map(|i| City::new(i, 2.0 * i as f64, 0.0)).collect();
        let dm = DistanceMatrix::from_cities(&cities).expect("finite");
        let mst = kruskal_mst(&dm);
        assert_eq!(mst.cost, 8);
        assert_eq!(mst.edges, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_mst_edge_count() {
        let cities: Vec<City> = (0..7)
            .map(|i| City::new(i, (i * i) as f64, (3 * i % 5) as f64))
            .collect();
        let dm = DistanceMatrix::from_cities(&cities).expect("finite");
        let mst = kruskal_mst(&dm);
        assert_eq!(mst.edges.len(), 6);
        let sum: u64 = mst.edges.iter().map(|&(i, j)| dm.get(i, j)).sum();
        assert_eq!(sum, mst.cost);
        assert!(mst.edges.iter().all(|&(i, j)| i < j));
    }

    #[test]
    fn test_mst_trivial() {
        let empty = DistanceMatrix::from_cities(&[]).expect("empty ok");
        assert_eq!(kruskal_mst(&empty), SpanningTree { cost: 0, edges: vec![] });

        let single = DistanceMatrix::from_data(1, vec![0]).expect("valid");
        assert_eq!(kruskal_mst(&single).edges.len(), 0);

        let pair = DistanceMatrix::from_data(2, vec![0, 9, 9, 0]).expect("valid");
        assert_eq!(kruskal_mst(&pair), SpanningTree { cost: 9, edges: vec![(0, 1)] });
    }
}
