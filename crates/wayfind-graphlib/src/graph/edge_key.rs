//! Lookup keys for the `(source, target)` edge index.

use std::hash::{Hash, Hasher};

/// Owned key stored in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EdgeKey {
    source: String,
    target: String,
}

impl EdgeKey {
    pub(crate) fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

// Hashes exactly like `EdgeKeyView`.
impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.as_str().hash(state);
        self.target.as_str().hash(state);
    }
}

/// Borrowed probe, so queries never allocate.
#[derive(Clone, Copy, Hash)]
pub(crate) struct EdgeKeyView<'a> {
    pub(crate) source: &'a str,
    pub(crate) target: &'a str,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.source == self.source && key.target == self.target
    }
}
