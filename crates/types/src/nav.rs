//! Navigation tree data model.
//!
//! Navigation entries are compile-time constants: every field borrows from
//! `'static` data and children are plain slices, so a tree is just a nested
//! literal. Nodes are identified by their [`NavPath`] rather than their
//! label, which keeps two entries with the same display text independent.

use std::fmt;

use serde::Serialize;

/// One row in the navigation tree, optionally with nested children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Human-readable display text.
    pub label: &'static str,
    /// Glyph rendered before the label.
    pub icon: &'static str,
    /// Optional short annotation such as a count or "New".
    pub badge: Option<&'static str>,
    /// Marks the entry as the current page. Presentational only.
    pub active: bool,
    /// Ordered child entries; empty for leaf nodes.
    pub children: &'static [NavEntry],
}

impl NavEntry {
    /// Creates a leaf entry with no badge.
    pub const fn leaf(label: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            icon,
            badge: None,
            active: false,
            children: &[],
        }
    }

    /// Creates a parent entry owning the provided children.
    pub const fn group(label: &'static str, icon: &'static str, children: &'static [NavEntry]) -> Self {
        Self {
            label,
            icon,
            badge: None,
            active: false,
            children,
        }
    }

    /// Returns a copy of the entry carrying the given badge.
    pub const fn with_badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Returns a copy of the entry flagged as the current page.
    pub const fn marked_active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Whether the entry has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Index path from the root sequence to a node.
///
/// `[1, 0]` is the first child of the second top-level entry. Paths order
/// lexicographically, which matches the document order of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NavPath(Vec<usize>);

impl NavPath {
    /// Path of a top-level entry.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent node, or `None` for top-level entries.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Number of ancestors between the node and the root sequence.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Iterates over the strict ancestors of this path, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = NavPath> + '_ {
        (1..self.0.len()).rev().map(|len| NavPath(self.0[..len].to_vec()))
    }
}

impl From<Vec<usize>> for NavPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// Finds the first entry with `label` in depth-first document order.
pub fn find_path_by_label(entries: &[NavEntry], label: &str) -> Option<NavPath> {
    fn walk(entries: &[NavEntry], label: &str, prefix: Option<&NavPath>) -> Option<NavPath> {
        for (index, entry) in entries.iter().enumerate() {
            let path = match prefix {
                Some(parent) => parent.child(index),
                None => NavPath::root(index),
            };
            if entry.label == label {
                return Some(path);
            }
            if let Some(found) = walk(entry.children, label, Some(&path)) {
                return Some(found);
            }
        }
        None
    }
    walk(entries, label, None)
}

/// Collects the paths of every entry that has children, in document order.
pub fn parent_paths(entries: &[NavEntry]) -> Vec<NavPath> {
    fn walk(entries: &[NavEntry], prefix: Option<&NavPath>, out: &mut Vec<NavPath>) {
        for (index, entry) in entries.iter().enumerate() {
            let path = match prefix {
                Some(parent) => parent.child(index),
                None => NavPath::root(index),
            };
            if !entry.is_leaf() {
                out.push(path.clone());
                walk(entry.children, Some(&path), out);
            }
        }
    }
    let mut out = Vec::new();
    walk(entries, None, &mut out);
    out
}
