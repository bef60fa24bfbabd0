//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// When `false`, [`Graph::add_edge`](super::Graph::add_edge) stores both orientations of
    /// every connection.
    pub directed: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::undirected()
    }
}
