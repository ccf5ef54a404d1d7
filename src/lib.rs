//! Exact maximum s-t flow on directed graphs with integer capacities,
//! computed with the shortest-augmenting-path (BFS residual) method.

pub mod edmonds_karp;
pub mod error;
pub mod graph;
mod residual;
