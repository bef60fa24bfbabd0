//! A* least-cost path search.
//!
//! The open set is ordered by `f = g + h` and then by label, so the vertex expanded next is
//! always the lowest-`f` one with the lexicographically smallest label among ties. Runs are
//! fully deterministic for a given graph and heuristic.

use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::graphlib::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A route from start to goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// Vertex labels in travel order, start first.
    pub vertices: Vec<String>,
    /// Sum of the edge weights along `vertices`.
    pub cost: f64,
}

impl Path {
    pub fn start(&self) -> &str {
        &self.vertices[0]
    }

    pub fn goal(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenEntry<'a> {
    f: f64,
    label: &'a str,
}

impl Ord for OpenEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.label.cmp(other.label))
    }
}

impl PartialOrd for OpenEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry<'_> {}

/// Known-but-unevaluated vertices keyed by their current `f` score.
#[derive(Default)]
struct OpenSet<'a> {
    queue: BTreeSet<OpenEntry<'a>>,
    f_score: FxHashMap<&'a str, f64>,
}

impl<'a> OpenSet<'a> {
    fn contains(&self, label: &str) -> bool {
        self.f_score.contains_key(label)
    }

    /// Inserts `label` or moves it to its new `f` score.
    fn upsert(&mut self, label: &'a str, f: f64) {
        if let Some(old) = self.f_score.insert(label, f) {
            self.queue.remove(&OpenEntry { f: old, label });
        }
        self.queue.insert(OpenEntry { f, label });
    }

    fn pop_best(&mut self) -> Option<&'a str> {
        let OpenEntry { label, .. } = self.queue.pop_first()?;
        self.f_score.remove(label);
        Some(label)
    }
}

fn estimate<H: Heuristic + ?Sized>(heuristic: &H, from: &str, to: &str) -> Result<f64> {
    heuristic
        .estimate(from, to)
        .ok_or_else(|| Error::MissingHeuristic {
            from: from.to_string(),
            to: to.to_string(),
        })
}

/// Walks predecessor links back from `goal`. The result is in goal-to-start order.
fn reconstruct_path<'a>(came_from: &FxHashMap<&'a str, &'a str>, goal: &'a str) -> Vec<&'a str> {
    let mut total_path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(current) {
        total_path.push(prev);
        current = prev;
    }
    total_path
}

/// Finds a least-cost path from `start` to `end`.
///
/// Returns `Ok(None)` when `end` cannot be reached. A heuristic with no estimate for a vertex
/// the search needs is an error, including `(start, end)` itself when `start == end`.
pub fn a_star<'a, H>(
    graph: &'a Graph,
    heuristic: &H,
    start: &'a str,
    end: &str,
) -> Result<Option<Path>>
where
    H: Heuristic + ?Sized,
{
    let start_f = estimate(heuristic, start, end)?;
    if start == end {
        return Ok(Some(Path {
            vertices: vec![start.to_string()],
            cost: 0.0,
        }));
    }

    let mut open = OpenSet::default();
    let mut closed: FxHashSet<&'a str> = FxHashSet::default();
    let mut came_from: FxHashMap<&'a str, &'a str> = FxHashMap::default();
    let mut g_score: FxHashMap<&'a str, f64> = FxHashMap::default();

    g_score.insert(start, 0.0);
    open.upsert(start, start_f);

    while let Some(current) = open.pop_best() {
        let current_g = g_score.get(current).copied().unwrap_or(f64::INFINITY);
        if current == end {
            let mut vertices: Vec<String> = reconstruct_path(&came_from, current)
                .into_iter()
                .map(str::to_string)
                .collect();
            vertices.reverse();
            tracing::debug!(
                start,
                end,
                cost = current_g,
                expanded = closed.len(),
                "a* reached goal"
            );
            return Ok(Some(Path {
                vertices,
                cost: current_g,
            }));
        }

        closed.insert(current);
        tracing::trace!(vertex = current, g = current_g, "a* expanding");

        for neighbor in graph.find_neighbors(current) {
            if closed.contains(neighbor) {
                continue;
            }
            if !open.contains(neighbor) {
                open.upsert(neighbor, f64::INFINITY);
            }

            let tentative = current_g + graph.dist_between(current, neighbor);
            let known = g_score.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative >= known {
                continue;
            }

            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative);
            let f = tentative + estimate(heuristic, neighbor, end)?;
            open.upsert(neighbor, f);
        }
    }

    tracing::debug!(start, end, expanded = closed.len(), "a* exhausted open set");
    Ok(None)
}
