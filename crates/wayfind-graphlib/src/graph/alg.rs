//! Helper algorithms over [`Graph`].

use super::Graph;
use std::collections::{BTreeSet, VecDeque};

/// Connected components, ignoring edge direction.
///
/// Components come out in first-seen vertex order; members of a component are in BFS order from
/// its first-seen vertex.
pub fn components(g: &Graph) -> Vec<Vec<String>> {
    let n = g.vertex_count();
    let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in &g.edges {
        adjacent[e.source_ix].push(e.target_ix);
        adjacent[e.target_ix].push(e.source_ix);
    }

    let mut seen: BTreeSet<usize> = BTreeSet::new();
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in 0..n {
        if !seen.insert(start) {
            continue;
        }
        let mut comp: Vec<String> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(g.vertices[v].clone());
            for &w in &adjacent[v] {
                if seen.insert(w) {
                    q.push_back(w);
                }
            }
        }
        out.push(comp);
    }

    out
}

pub fn is_connected(g: &Graph) -> bool {
    components(g).len() <= 1
}
