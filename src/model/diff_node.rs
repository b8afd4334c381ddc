//! Diff tree produced by comparing two documents.

use super::Node;
use serde::Serialize;

/// One entry in a diff tree.
///
/// `Root` only ever appears at the top; every other variant names the key it
/// describes. Sibling entries are sorted by key in byte order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffNode {
    Root {
        children: Vec<DiffNode>,
    },
    Added {
        key: String,
        value: Node,
    },
    Removed {
        key: String,
        value: Node,
    },
    Changed {
        key: String,
        #[serde(rename = "oldValue")]
        old_value: Node,
        #[serde(rename = "newValue")]
        new_value: Node,
    },
    Unchanged {
        key: String,
        value: Node,
    },
    Nested {
        key: String,
        children: Vec<DiffNode>,
    },
}

/// Discriminant of a [`DiffNode`], handy for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Root,
    Added,
    Removed,
    Changed,
    Unchanged,
    Nested,
}

impl DiffKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
            Self::Nested => "nested",
        }
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl DiffNode {
    #[must_use]
    pub const fn kind(&self) -> DiffKind {
        match self {
            Self::Root { .. } => DiffKind::Root,
            Self::Added { .. } => DiffKind::Added,
            Self::Removed { .. } => DiffKind::Removed,
            Self::Changed { .. } => DiffKind::Changed,
            Self::Unchanged { .. } => DiffKind::Unchanged,
            Self::Nested { .. } => DiffKind::Nested,
        }
    }

    /// The key this entry describes; `None` for the root.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Root { .. } => None,
            Self::Added { key, .. }
            | Self::Removed { key, .. }
            | Self::Changed { key, .. }
            | Self::Unchanged { key, .. }
            | Self::Nested { key, .. } => Some(key),
        }
    }

    /// Child entries for `Root` and `Nested`; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[DiffNode] {
        match self {
            Self::Root { children } | Self::Nested { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether this entry, or anything below it, records a difference.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        match self {
            Self::Added { .. } | Self::Removed { .. } | Self::Changed { .. } => true,
            Self::Unchanged { .. } => false,
            Self::Root { children } | Self::Nested { children, .. } => {
                children.iter().any(Self::has_changes)
            }
        }
    }

    /// The same diff seen from the other side: additions become removals,
    /// old and new values trade places, nesting is preserved.
    #[must_use]
    pub fn inverted(&self) -> Self {
        match self {
            Self::Root { children } => Self::Root {
                children: children.iter().map(Self::inverted).collect(),
            },
            Self::Added { key, value } => Self::Removed {
                key: key.clone(),
                value: value.clone(),
            },
            Self::Removed { key, value } => Self::Added {
                key: key.clone(),
                value: value.clone(),
            },
            Self::Changed {
                key,
                old_value,
                new_value,
            } => Self::Changed {
                key: key.clone(),
                old_value: new_value.clone(),
                new_value: old_value.clone(),
            },
            Self::Unchanged { .. } => self.clone(),
            Self::Nested { key, children } => Self::Nested {
                key: key.clone(),
                children: children.iter().map(Self::inverted).collect(),
            },
        }
    }
}
