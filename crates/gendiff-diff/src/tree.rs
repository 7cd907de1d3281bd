//! Diff tree construction: compare two mappings key by key.
//!
//! The tree covers the union of both mappings' keys in ascending order. Keys
//! holding a mapping on both sides are compared recursively and produce a
//! [`NodeKind::Nested`] node; every other shared key is compared by deep
//! equality.

use std::collections::BTreeSet;

use gendiff_types::{Mapping, Value};
use tracing::trace;

/// The result of comparing two mappings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffTree {
    /// Top-level nodes, sorted by key.
    pub nodes: Vec<DiffNode>,
}

impl DiffTree {
    /// Create an empty diff tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if neither input had any keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if any node, at any depth, is not unchanged.
    pub fn has_changes(&self) -> bool {
        self.additions() + self.removals() + self.updates() > 0
    }

    /// Number of added keys across all levels.
    pub fn additions(&self) -> usize {
        count(&self.nodes, &|k| matches!(k, NodeKind::Added { .. }))
    }

    /// Number of removed keys across all levels.
    pub fn removals(&self) -> usize {
        count(&self.nodes, &|k| matches!(k, NodeKind::Removed { .. }))
    }

    /// Number of updated keys across all levels.
    pub fn updates(&self) -> usize {
        count(&self.nodes, &|k| matches!(k, NodeKind::Updated { .. }))
    }
}

fn count(nodes: &[DiffNode], pred: &dyn Fn(&NodeKind) -> bool) -> usize {
    nodes
        .iter()
        .map(|n| match &n.kind {
            NodeKind::Nested { children } => count(children, pred),
            kind => usize::from(pred(kind)),
        })
        .sum()
}

/// One key's entry in a diff tree.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffNode {
    pub key: String,
    pub kind: NodeKind,
}

impl DiffNode {
    /// Lowercase name of the node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Added { .. } => "added",
            NodeKind::Removed { .. } => "removed",
            NodeKind::Unchanged { .. } => "unchanged",
            NodeKind::Updated { .. } => "updated",
            NodeKind::Nested { .. } => "nested",
        }
    }
}

/// How a key differs between the two inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// The key exists only in the second mapping.
    Added { value: Value },
    /// The key exists only in the first mapping.
    Removed { value: Value },
    /// The key holds deep-equal values on both sides.
    Unchanged { value: Value },
    /// The key holds different values, at least one of them not a mapping.
    Updated { old: Value, new: Value },
    /// The key holds a mapping on both sides.
    Nested { children: Vec<DiffNode> },
}

/// Compute the diff tree between two mappings.
pub fn diff_mappings(old: &Mapping, new: &Mapping) -> DiffTree {
    DiffTree {
        nodes: diff_level(old, new),
    }
}

fn diff_level(old: &Mapping, new: &Mapping) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    trace!(keys = keys.len(), "diffing mapping level");

    keys.into_iter()
        .map(|key| {
            let kind = match (old.get(key), new.get(key)) {
                (Some(Value::Mapping(a)), Some(Value::Mapping(b))) => NodeKind::Nested {
                    children: diff_level(a, b),
                },
                (Some(a), Some(b)) if a == b => NodeKind::Unchanged { value: a.clone() },
                (Some(a), Some(b)) => NodeKind::Updated {
                    old: a.clone(),
                    new: b.clone(),
                },
                (Some(a), None) => NodeKind::Removed { value: a.clone() },
                (None, Some(b)) => NodeKind::Added { value: b.clone() },
                (None, None) => unreachable!("key comes from one of the mappings"),
            };
            DiffNode {
                key: key.clone(),
                kind,
            }
        })
        .collect()
}
