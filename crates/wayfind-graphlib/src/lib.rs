#![forbid(unsafe_code)]

//! Graph store used by `wayfind`.
//!
//! Graphs are kept as a flat list of weighted, directed edges keyed by string labels. Vertices
//! have no storage of their own; they are whatever labels appear in the edge list, in the order
//! they were first seen. Undirected graphs (the default) store every connection twice, once per
//! orientation.

mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::adjacency::AdjacencyList;
pub use graph::alg;
pub use graph::entries::WeightedEdge;
pub use graph::options::GraphOptions;
pub use graph::{Graph, format_weight, sort_edges};
