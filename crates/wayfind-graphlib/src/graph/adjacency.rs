//! Adjacency-list view of a [`Graph`](super::Graph).
//!
//! Built on demand from the edge list; every vertex that is the source of at least one edge gets
//! an entry holding its `(neighbor, weight)` pairs in edge-list order.

use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    vertex_count: usize,
    vertices: IndexMap<String, Vec<(String, f64)>>,
}

impl AdjacencyList {
    pub(in crate::graph) fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            vertices: IndexMap::new(),
        }
    }

    pub(in crate::graph) fn push(&mut self, source: &str, target: &str, weight: f64) {
        if let Some(list) = self.vertices.get_mut(source) {
            list.push((target.to_string(), weight));
            return;
        }
        self.vertices
            .insert(source.to_string(), vec![(target.to_string(), weight)]);
    }

    /// Number of distinct labels in the source graph (including sink-only vertices).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn neighbors(&self, v: &str) -> &[(String, f64)] {
        self.vertices.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, f64)])> {
        self.vertices
            .iter()
            .map(|(label, list)| (label.as_str(), list.as_slice()))
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, list)) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label} [")?;
            for (j, (n, w)) in list.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({n}, {})", super::format_weight(*w))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
