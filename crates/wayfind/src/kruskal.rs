//! Kruskal's minimum spanning tree.
//!
//! Undirected graphs store each connection twice (`u -> v` and `v -> u`). The scan works on
//! [`Graph::undirected_edges`], which keeps one orientation per connection, so every candidate
//! edge is a distinct connection and the accepted-edge count can be compared directly against
//! `vertex_count - 1`.

use crate::error::{Error, Result};
use crate::graphlib::{Graph, WeightedEdge, alg, format_weight, sort_edges};
use crate::union_find::UnionFind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_weight: f64,
}

impl SpanningTree {
    /// Accepted edges, in the order Kruskal accepted them (ascending weight).
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The edges involved in the minimum spanning tree are as follows: "
        )?;
        for e in &self.edges {
            writeln!(f, "{e}")?;
        }
        write!(
            f,
            "The total weight of the tree is: {}",
            format_weight(self.total_weight)
        )
    }
}

/// Seeds one singleton set per vertex of `graph`.
pub fn fill_union_find(graph: &Graph) -> Result<UnionFind> {
    let mut union_find = UnionFind::with_capacity(graph.vertex_count());
    for v in graph.list_of_vertices() {
        union_find.makeset(v)?;
    }
    Ok(union_find)
}

/// True when adding `edge` would not close a cycle.
fn is_acyclic(union_find: &UnionFind, edge: &WeightedEdge) -> Result<bool> {
    Ok(union_find.find(&edge.source)? != union_find.find(&edge.target)?)
}

/// Builds a minimum spanning tree of `graph`.
///
/// Fails with [`Error::Disconnected`] when the edges run out before every vertex is joined.
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    let wanted = graph.vertex_count().saturating_sub(1);

    let mut candidates = graph.undirected_edges();
    sort_edges(&mut candidates);

    let mut union_find = fill_union_find(graph)?;
    let mut tree = SpanningTree::default();
    let mut processed = 0usize;

    for edge in candidates {
        if tree.edges.len() == wanted {
            break;
        }
        processed += 1;
        if !is_acyclic(&union_find, edge)? {
            tracing::trace!(%edge, "kruskal rejected edge");
            continue;
        }
        union_find.union(&edge.source, &edge.target)?;
        tree.total_weight += edge.weight;
        tree.edges.push(edge.clone());
    }

    if tree.edges.len() < wanted {
        return Err(Error::Disconnected {
            vertices: graph.vertex_count(),
            components: alg::components(graph).len(),
        });
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        directed = graph.is_directed(),
        edges = tree.edges.len(),
        processed,
        total_weight = tree.total_weight,
        "kruskal built spanning tree"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::{fill_union_find, kruskal};
    use crate::Error;
    use crate::graphlib::{Graph, GraphOptions};

    #[test]
    fn fill_union_find_registers_every_vertex_once() {
        let g =
            Graph::from_edges(GraphOptions::default(), [("a", "b", 1.0), ("b", "c", 1.0)]).unwrap();
        let uf = fill_union_find(&g).unwrap();
        assert_eq!(uf.len(), 3);
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn empty_graph_has_an_empty_tree() {
        let tree = kruskal(&Graph::default()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0.0);
    }

    #[test]
    fn reverse_twins_never_enter_the_tree() {
        let g = Graph::from_edges(GraphOptions::default(), [("a", "b", 1.0)]).unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.edges()[0].source, "a");
        assert_eq!(tree.edges()[0].target, "b");
    }

    #[test]
    fn disconnected_graph_reports_components() {
        let g =
            Graph::from_edges(GraphOptions::default(), [("a", "b", 1.0), ("c", "d", 1.0)]).unwrap();
        let err = kruskal(&g).unwrap_err();
        assert!(matches!(
            err,
            Error::Disconnected {
                vertices: 4,
                components: 2
            }
        ));
    }

    #[test]
    fn display_matches_report_format() {
        let g =
            Graph::from_edges(GraphOptions::default(), [("a", "b", 2.0), ("b", "c", 0.5)]).unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(
            tree.to_string(),
            "The edges involved in the minimum spanning tree are as follows: \n\
             (b, c, 0.5)\n\
             (a, b, 2.0)\n\
             The total weight of the tree is: 2.5"
        );
    }
}
