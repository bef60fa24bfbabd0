//! Edge records for [`Graph`](super::Graph).

use serde::Serialize;
use std::fmt;

/// One directed `(source, target, weight)` triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// True when `other` connects the same two labels with the same weight, in either
    /// orientation.
    pub fn same_connection(&self, other: &WeightedEdge) -> bool {
        if self.weight.to_bits() != other.weight.to_bits() {
            return false;
        }
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.source,
            self.target,
            super::format_weight(self.weight)
        )
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry {
    pub(in crate::graph) edge: WeightedEdge,
    pub(in crate::graph) source_ix: usize,
    pub(in crate::graph) target_ix: usize,
}
