//! Structural diff engine implementation.

use crate::error::{GendiffError, Result, Side};
use crate::model::{DiffNode, Mapping, Node};
use std::collections::BTreeSet;

/// Default nesting ceiling. Matches the recursion limit the JSON and YAML
/// parsers enforce, so any document they accept can be compared.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Structural diff engine for comparing generic documents.
///
/// The engine holds configuration only; each comparison is a pure function
/// of its two inputs, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    max_depth: usize,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the nesting ceiling. `0` disables the check.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Get the configured nesting ceiling
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compare two documents whose roots must both be mappings.
    pub fn compare(&self, left: &Node, right: &Node) -> Result<DiffNode> {
        let left = left
            .as_mapping()
            .ok_or_else(|| GendiffError::invalid_input_kind(Side::Left, left.kind_name()))?;
        let right = right
            .as_mapping()
            .ok_or_else(|| GendiffError::invalid_input_kind(Side::Right, right.kind_name()))?;
        self.compare_mappings(left, right)
    }

    /// Compare two mappings and return the root of the diff tree.
    pub fn compare_mappings(&self, left: &Mapping, right: &Mapping) -> Result<DiffNode> {
        let mut path = Vec::new();
        let children = self.compare_children(left, right, &mut path)?;
        tracing::debug!("Compared documents: {} top-level keys", children.len());
        Ok(DiffNode::Root { children })
    }

    /// Classify every key of one level. `path` holds the keys leading here
    /// and is only used to report where a depth overflow happened.
    fn compare_children<'a>(
        &self,
        left: &'a Mapping,
        right: &'a Mapping,
        path: &mut Vec<&'a str>,
    ) -> Result<Vec<DiffNode>> {
        // BTreeSet over &str orders by bytes, never by locale.
        let keys: BTreeSet<&'a str> = left
            .keys()
            .chain(right.keys())
            .map(String::as_str)
            .collect();

        let mut children = Vec::with_capacity(keys.len());
        for key in keys {
            let node = match (left.get(key), right.get(key)) {
                (Some(value), None) => DiffNode::Removed {
                    key: key.to_string(),
                    value: value.clone(),
                },
                (None, Some(value)) => DiffNode::Added {
                    key: key.to_string(),
                    value: value.clone(),
                },
                (Some(Node::Mapping(old)), Some(Node::Mapping(new))) => {
                    path.push(key);
                    if self.max_depth != 0 && path.len() > self.max_depth {
                        return Err(GendiffError::too_deep(path.join("."), self.max_depth));
                    }
                    let nested = self.compare_children(old, new, path)?;
                    path.pop();
                    DiffNode::Nested {
                        key: key.to_string(),
                        children: nested,
                    }
                }
                (Some(old), Some(new)) if old != new => DiffNode::Changed {
                    key: key.to_string(),
                    old_value: old.clone(),
                    new_value: new.clone(),
                },
                (Some(value), Some(_)) => DiffNode::Unchanged {
                    key: key.to_string(),
                    value: value.clone(),
                },
                // Every key came from one of the two mappings.
                (None, None) => continue,
            };
            children.push(node);
        }
        Ok(children)
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two documents with a default [`DiffEngine`].
pub fn compare(left: &Node, right: &Node) -> Result<DiffNode> {
    DiffEngine::new().compare(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffErrorKind;
    use crate::model::DiffKind;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from(value)
    }

    fn diff(left: serde_json::Value, right: serde_json::Value) -> DiffNode {
        compare(&node(left), &node(right)).expect("diff should succeed")
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(diff(json!({}), json!({})), DiffNode::Root { children: vec![] });
    }

    #[test]
    fn test_added_removed_unchanged() {
        let result = diff(json!({"a": 1, "b": 2}), json!({"b": 2, "c": 3}));
        assert_eq!(
            result.children(),
            &[
                DiffNode::Removed {
                    key: "a".into(),
                    value: Node::from(1)
                },
                DiffNode::Unchanged {
                    key: "b".into(),
                    value: Node::from(2)
                },
                DiffNode::Added {
                    key: "c".into(),
                    value: Node::from(3)
                },
            ]
        );
    }

    #[test]
    fn test_nested_change() {
        let result = diff(json!({"a": {"x": 1}}), json!({"a": {"x": 2}}));
        assert_eq!(
            result.children(),
            &[DiffNode::Nested {
                key: "a".into(),
                children: vec![DiffNode::Changed {
                    key: "x".into(),
                    old_value: Node::from(1),
                    new_value: Node::from(2),
                }],
            }]
        );
    }

    #[test]
    fn test_null_is_not_zero() {
        let result = diff(json!({"a": null}), json!({"a": 0}));
        assert_eq!(result.children()[0].kind(), DiffKind::Changed);
    }

    #[test]
    fn test_absent_is_not_null() {
        let result = diff(json!({}), json!({"a": null}));
        assert_eq!(
            result.children(),
            &[DiffNode::Added {
                key: "a".into(),
                value: Node::Null
            }]
        );
    }

    #[test]
    fn test_mapping_against_scalar_is_changed() {
        let result = diff(json!({"a": {"x": 1}}), json!({"a": 5}));
        assert_eq!(
            result.children(),
            &[DiffNode::Changed {
                key: "a".into(),
                old_value: node(json!({"x": 1})),
                new_value: Node::from(5),
            }]
        );
    }

    #[test]
    fn test_lists_are_opaque() {
        let result = diff(json!({"l": [1, {"x": 1}]}), json!({"l": [1, {"x": 2}]}));
        assert_eq!(result.children()[0].kind(), DiffKind::Changed);

        let same = diff(json!({"l": [1, 2]}), json!({"l": [1, 2]}));
        assert_eq!(same.children()[0].kind(), DiffKind::Unchanged);
    }

    #[test]
    fn test_int_and_float_differ() {
        let result = diff(json!({"n": 1}), json!({"n": 1.0}));
        assert_eq!(result.children()[0].kind(), DiffKind::Changed);
    }

    #[test]
    fn test_keys_sorted_by_bytes() {
        let result = diff(json!({"b": 1, "é": 1, "B": 1}), json!({"a": 1, "_": 1}));
        let keys: Vec<_> = result.children().iter().filter_map(DiffNode::key).collect();
        assert_eq!(keys, vec!["B", "_", "a", "b", "é"]);
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = compare(&Node::List(vec![]), &Node::default()).expect_err("list root");
        assert_eq!(
            err.diff_kind(),
            Some(&DiffErrorKind::InvalidInputKind {
                side: Side::Left,
                found: "list"
            })
        );

        let err = compare(&Node::default(), &Node::Null).expect_err("null root");
        assert_eq!(
            err.diff_kind(),
            Some(&DiffErrorKind::InvalidInputKind {
                side: Side::Right,
                found: "null"
            })
        );
    }

    #[test]
    fn test_depth_ceiling() {
        let deep = node(json!({"a": {"b": {"c": 1}}}));
        let deeper = node(json!({"a": {"b": {"c": 2}}}));

        let err = DiffEngine::new()
            .with_max_depth(1)
            .compare(&deep, &deeper)
            .expect_err("should exceed depth");
        assert_eq!(err.diff_kind(), Some(&DiffErrorKind::TooDeep { limit: 1 }));
        assert!(err.to_string().contains("a.b"));

        assert!(DiffEngine::new().with_max_depth(2).compare(&deep, &deeper).is_ok());
        assert!(DiffEngine::new().with_max_depth(0).compare(&deep, &deeper).is_ok());
    }

    #[test]
    fn test_depth_only_counts_shared_mappings() {
        // A mapping on one side only is copied as a value, not descended into.
        let left = node(json!({}));
        let right = node(json!({"a": {"b": {"c": {"d": 1}}}}));
        let result = DiffEngine::new()
            .with_max_depth(1)
            .compare(&left, &right)
            .expect("added subtree is not traversed");
        assert_eq!(result.children()[0].kind(), DiffKind::Added);
    }
}
