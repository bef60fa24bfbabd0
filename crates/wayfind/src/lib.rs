#![forbid(unsafe_code)]

//! Route search and spanning trees over labelled, weighted graphs.
//!
//! - [`a_star`] finds a least-cost path between two labels using an injected [`Heuristic`].
//! - [`kruskal`] builds a minimum spanning tree with a [`UnionFind`] it owns for the run.
//!
//! Graphs come from [`graphlib`] (re-exported `wayfind-graphlib`) and can be read from text with
//! the helpers in [`load`].

pub use wayfind_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod astar;
pub mod error;
pub mod heuristic;
pub mod kruskal;
pub mod load;
pub mod union_find;

pub use astar::{Path, a_star};
pub use error::{Error, Result};
pub use graphlib::{Graph, GraphOptions, WeightedEdge};
pub use heuristic::{Heuristic, HeuristicTable, ZeroHeuristic};
pub use kruskal::{SpanningTree, kruskal};
pub use load::{LoadOptions, read_edge_list, read_heuristic_table};
pub use union_find::UnionFind;
