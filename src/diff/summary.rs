//! Aggregate counts over a diff tree.

use crate::model::DiffNode;
use serde::Serialize;

/// Per-kind counts over a whole diff tree, nested levels included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub nested: usize,
}

impl DiffSummary {
    /// Walk `diff` and count every entry.
    #[must_use]
    pub fn from_diff(diff: &DiffNode) -> Self {
        let mut summary = Self::default();
        summary.visit(diff);
        summary
    }

    fn visit(&mut self, node: &DiffNode) {
        match node {
            DiffNode::Root { children } => children.iter().for_each(|c| self.visit(c)),
            DiffNode::Nested { children, .. } => {
                self.nested += 1;
                children.iter().for_each(|c| self.visit(c));
            }
            DiffNode::Added { .. } => self.added += 1,
            DiffNode::Removed { .. } => self.removed += 1,
            DiffNode::Changed { .. } => self.changed += 1,
            DiffNode::Unchanged { .. } => self.unchanged += 1,
        }
    }

    /// Number of leaf entries that record a difference.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.added + self.removed + self.changed
    }

    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}
