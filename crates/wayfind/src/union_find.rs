//! Disjoint sets over string labels.
//!
//! Nodes live in an arena and point at their parent by index. `find` walks the parent chain
//! without compressing it, so tree shapes only change through `union` and stay reproducible:
//! `union(x, y)` always hangs the root of `x` under the root of `y`.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::fmt;

#[derive(Debug, Clone)]
struct TreeNode {
    label: String,
    parent: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    refs: FxHashMap<String, usize>,
    trees: Vec<TreeNode>,
    roots: usize,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            refs: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            trees: Vec::with_capacity(capacity),
            roots: 0,
        }
    }

    /// Registers `label` as a new singleton set.
    pub fn makeset(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if self.refs.contains_key(&label) {
            return Err(Error::DuplicateKey { label });
        }
        self.refs.insert(label.clone(), self.trees.len());
        self.trees.push(TreeNode {
            label,
            parent: None,
        });
        self.roots += 1;
        Ok(())
    }

    fn index_of(&self, label: &str) -> Result<usize> {
        self.refs
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownKey {
                label: label.to_string(),
            })
    }

    fn root_of(&self, mut ix: usize) -> usize {
        while let Some(parent) = self.trees[ix].parent {
            ix = parent;
        }
        ix
    }

    /// Label of the root of `label`'s tree.
    pub fn find(&self, label: &str) -> Result<&str> {
        let root = self.root_of(self.index_of(label)?);
        Ok(self.trees[root].label.as_str())
    }

    /// Attaches the root of `x`'s set under the root of `y`'s set. Labels that already share a
    /// root are left alone.
    pub fn union(&mut self, x: &str, y: &str) -> Result<()> {
        let root_x = self.root_of(self.index_of(x)?);
        let root_y = self.root_of(self.index_of(y)?);
        if root_x == root_y {
            return Ok(());
        }
        self.trees[root_x].parent = Some(root_y);
        self.roots -= 1;
        Ok(())
    }

    pub fn same_set(&self, x: &str, y: &str) -> Result<bool> {
        let root_x = self.root_of(self.index_of(x)?);
        let root_y = self.root_of(self.index_of(y)?);
        Ok(root_x == root_y)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.refs.contains_key(label)
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.roots
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.trees.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match node.parent {
                Some(p) => write!(f, "{} -> {}", node.label, self.trees[p].label)?,
                None => write!(f, "{} -> None", node.label)?,
            }
        }
        Ok(())
    }
}
