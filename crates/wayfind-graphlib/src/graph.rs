//! Edge-list graph container.
//!
//! The store is append-only: edges go in through [`Graph::add_edge`] while a graph is being
//! built, and every query afterwards is read-only.

pub mod adjacency;
pub mod alg;
pub(crate) mod edge_key;
pub(crate) mod entries;
pub(crate) mod options;

use crate::error::{Error, Result};
use adjacency::AdjacencyList;
use edge_key::{EdgeKey, EdgeKeyView};
use entries::{EdgeEntry, WeightedEdge};
use options::GraphOptions;
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,

    // Distinct labels in first-seen order.
    vertices: Vec<String>,
    vertex_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry>,
    // `(v, w)` -> index of the last inserted `v -> w` edge.
    edge_index: HashMap<EdgeKey, usize>,

    // Per-vertex outgoing edge indices, in edge-list order.
    out_edges: Vec<Vec<usize>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_edges: Vec::new(),
        }
    }

    /// Builds a graph from `(source, target, weight)` triples, stopping at the first invalid
    /// weight.
    pub fn from_edges<I, S, T>(options: GraphOptions, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T, f64)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut g = Self::new(options);
        for (v, w, weight) in edges {
            g.add_edge(v, w, weight)?;
        }
        Ok(g)
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&ix) = self.vertex_index.get(label) {
            return ix;
        }
        let ix = self.vertices.len();
        self.vertices.push(label.to_string());
        self.vertex_index.insert(label.to_string(), ix);
        self.out_edges.push(Vec::new());
        ix
    }

    fn push_directed(&mut self, v: &str, w: &str, weight: f64) {
        let source_ix = self.intern(v);
        let target_ix = self.intern(w);
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            edge: WeightedEdge::new(v, w, weight),
            source_ix,
            target_ix,
        });
        self.out_edges[source_ix].push(idx);
        // Parallel edges: the newest one answers `weight` / `dist_between`.
        self.edge_index.insert(EdgeKey::new(v, w), idx);
    }

    /// Appends `v -> w`. Undirected graphs also append `w -> v` right after it.
    ///
    /// Negative, NaN and infinite weights are rejected and leave the graph unchanged.
    pub fn add_edge(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        weight: f64,
    ) -> Result<&mut Self> {
        let v = v.into();
        let w = w.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: v,
                to: w,
                weight,
            });
        }
        self.push_directed(&v, &w, weight);
        if !self.is_directed() {
            self.push_directed(&w, &v, weight);
        }
        Ok(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Distinct labels in first-seen order across the edge list.
    pub fn list_of_vertices(&self) -> Vec<&str> {
        self.vertices.iter().map(String::as_str).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &WeightedEdge> {
        self.edges.iter().map(|e| &e.edge)
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&EdgeKeyView { source: v, target: w })
    }

    /// Destinations of every edge leaving `v`, in edge-list order. Repeats are kept.
    pub fn find_neighbors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.vertex_index.get(v) else {
            return Vec::new();
        };
        self.out_edges[v_ix]
            .iter()
            .map(|&idx| {
                let e = &self.edges[idx];
                debug_assert_eq!(e.source_ix, v_ix);
                self.vertices[e.target_ix].as_str()
            })
            .collect()
    }

    pub fn weight(&self, v: &str, w: &str) -> Option<f64> {
        let idx = *self.edge_index.get(&EdgeKeyView { source: v, target: w })?;
        Some(self.edges[idx].edge.weight)
    }

    /// Weight of `v -> w`, or `f64::INFINITY` when there is no such edge.
    pub fn dist_between(&self, v: &str, w: &str) -> f64 {
        self.weight(v, w).unwrap_or(f64::INFINITY)
    }

    /// All edges, stable-sorted by ascending weight.
    pub fn sorted_edges(&self) -> Vec<&WeightedEdge> {
        let mut out: Vec<&WeightedEdge> = self.edges().collect();
        sort_edges(&mut out);
        out
    }

    /// One edge per logical connection.
    ///
    /// For undirected graphs the reverse twin stored by [`Graph::add_edge`] is dropped; the
    /// first orientation seen is kept. Parallel connections (same endpoints, inserted more than
    /// once) are all kept. Directed graphs return every edge.
    pub fn undirected_edges(&self) -> Vec<&WeightedEdge> {
        if self.is_directed() {
            return self.edges().collect();
        }
        // Reverse twins still owed, keyed by `(source_ix, target_ix, weight bits)`.
        let mut pending: HashMap<(usize, usize, u64), usize> = HashMap::default();
        let mut out: Vec<&WeightedEdge> = Vec::with_capacity(self.edges.len() / 2);
        for e in &self.edges {
            let key = (e.source_ix, e.target_ix, e.edge.weight.to_bits());
            if let Some(owed) = pending.get_mut(&key) {
                if *owed > 0 {
                    *owed -= 1;
                    continue;
                }
            }
            *pending
                .entry((e.target_ix, e.source_ix, e.edge.weight.to_bits()))
                .or_insert(0) += 1;
            out.push(&e.edge);
        }
        out
    }

    pub fn to_adjacency(&self) -> AdjacencyList {
        let mut adj = AdjacencyList::with_vertex_count(self.vertex_count());
        for e in &self.edges {
            adj.push(&e.edge.source, &e.edge.target, e.edge.weight);
        }
        adj
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.edges().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Stable sort by ascending weight; equal weights keep their relative order.
pub fn sort_edges(edges: &mut [&WeightedEdge]) {
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
}

/// Formats a weight the way the edge-list files write them: integral values keep one decimal
/// (`2.0`), everything else uses the shortest round-trip form.
pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() && weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{weight:.1}")
    } else {
        format!("{weight}")
    }
}
