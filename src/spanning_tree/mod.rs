//! Minimum spanning tree lower bound.
//!
//! - [`DisjointSet`] — Union-find with union by rank and path compression
//! - [`kruskal_mst`] — Kruskal's algorithm over the complete distance graph

mod kruskal;
mod union_find;

pub use kruskal::{kruskal_mst, SpanningTree};
pub use union_find::DisjointSet;
