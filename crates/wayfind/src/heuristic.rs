//! Heuristic estimates for A*.
//!
//! The search never computes estimates itself; it asks a [`Heuristic`] for the cost of getting
//! from a vertex to the goal. A missing estimate aborts the search.

use indexmap::IndexMap;

pub trait Heuristic {
    /// Non-negative estimate of the cost from `from` to `to`, or `None` when unknown.
    fn estimate(&self, from: &str, to: &str) -> Option<f64>;
}

impl<F> Heuristic for F
where
    F: Fn(&str, &str) -> Option<f64>,
{
    fn estimate(&self, from: &str, to: &str) -> Option<f64> {
        self(from, to)
    }
}

/// Estimates every pair as `0`, which turns A* into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &str, _to: &str) -> Option<f64> {
        Some(0.0)
    }
}

/// Precomputed estimates keyed by ordered `(from, to)` pairs.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTable {
    entries: IndexMap<String, IndexMap<String, f64>>,
    len: usize,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the estimate for `(from, to)`, replacing any earlier one.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>, estimate: f64) {
        let row = self.entries.entry(from.into()).or_default();
        if row.insert(to.into(), estimate).is_none() {
            self.len += 1;
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entries.iter().flat_map(|(from, row)| {
            row.iter()
                .map(move |(to, &estimate)| (from.as_str(), to.as_str(), estimate))
        })
    }
}

impl<F, T> FromIterator<(F, T, f64)> for HeuristicTable
where
    F: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, T, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (from, to, estimate) in iter {
            table.insert(from, to, estimate);
        }
        table
    }
}

impl Heuristic for HeuristicTable {
    fn estimate(&self, from: &str, to: &str) -> Option<f64> {
        self.get(from, to)
    }
}
