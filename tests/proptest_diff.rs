//! Property-based tests for the diff engine.
//!
//! Generates random document trees and checks the structural guarantees
//! every diff must hold regardless of input shape.

use gendiff::{DiffEngine, DiffKind, DiffNode, DiffSummary, Mapping, Node};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so both sides share keys often.
    prop::string::string_regex("[a-eA-E_ä]{1,3}").expect("valid regex")
}

fn leaf_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::from),
        (-5i64..5).prop_map(Node::from),
        "[a-c]{0,2}".prop_map(Node::from),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Node::List),
            prop::collection::vec((key_strategy(), inner), 0..6).prop_map(Node::mapping),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Node> {
    prop::collection::vec((key_strategy(), node_strategy()), 0..8).prop_map(Node::mapping)
}

/// Rebuild every mapping with its entries in reverse order.
fn reversed(node: &Node) -> Node {
    match node {
        Node::Mapping(map) => Node::Mapping(
            map.iter()
                .rev()
                .map(|(k, v)| (k.clone(), reversed(v)))
                .collect::<Mapping>(),
        ),
        Node::List(items) => Node::List(items.iter().map(reversed).collect()),
        other => other.clone(),
    }
}

/// Walk both trees in lockstep and check key union, ordering and classification.
fn check_level(diff: &[DiffNode], left: &Mapping, right: &Mapping) -> Result<(), TestCaseError> {
    let expected: BTreeSet<&str> = left.keys().chain(right.keys()).map(String::as_str).collect();
    let keys: Vec<&str> = diff.iter().filter_map(DiffNode::key).collect();

    prop_assert_eq!(keys.len(), diff.len());
    prop_assert_eq!(keys.iter().copied().collect::<Vec<_>>(), expected.iter().copied().collect::<Vec<_>>());

    for entry in diff {
        let key = entry.key().unwrap_or_default();
        let (old, new) = (left.get(key), right.get(key));
        match entry {
            DiffNode::Added { value, .. } => {
                prop_assert!(old.is_none());
                prop_assert_eq!(Some(value), new);
            }
            DiffNode::Removed { value, .. } => {
                prop_assert!(new.is_none());
                prop_assert_eq!(Some(value), old);
            }
            DiffNode::Changed {
                old_value,
                new_value,
                ..
            } => {
                prop_assert_ne!(old_value, new_value);
                prop_assert!(!(old_value.is_mapping() && new_value.is_mapping()));
            }
            DiffNode::Unchanged { value, .. } => {
                prop_assert_eq!(Some(value), old);
                prop_assert_eq!(old, new);
            }
            DiffNode::Nested { children, .. } => match (old, new) {
                (Some(Node::Mapping(l)), Some(Node::Mapping(r))) => check_level(children, l, r)?,
                _ => prop_assert!(false, "nested entry without two mappings at '{}'", key),
            },
            DiffNode::Root { .. } => prop_assert!(false, "root below the top level"),
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn diff_is_deterministic(left in mapping_strategy(), right in mapping_strategy()) {
        let engine = DiffEngine::new();
        let first = engine.compare(&left, &right).unwrap();
        let second = engine.compare(&left, &right).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn diff_covers_key_union_in_order(left in mapping_strategy(), right in mapping_strategy()) {
        let diff = DiffEngine::new().compare(&left, &right).unwrap();
        prop_assert_eq!(diff.kind(), DiffKind::Root);
        check_level(
            diff.children(),
            left.as_mapping().unwrap(),
            right.as_mapping().unwrap(),
        )?;
    }

    #[test]
    fn insertion_order_does_not_matter(left in mapping_strategy(), right in mapping_strategy()) {
        let engine = DiffEngine::new();
        let forward = engine.compare(&left, &right).unwrap();
        let shuffled = engine.compare(&reversed(&left), &reversed(&right)).unwrap();
        prop_assert_eq!(forward, shuffled);
    }

    #[test]
    fn swapping_sides_inverts(left in mapping_strategy(), right in mapping_strategy()) {
        let engine = DiffEngine::new();
        let forward = engine.compare(&left, &right).unwrap();
        let backward = engine.compare(&right, &left).unwrap();
        prop_assert_eq!(forward.inverted(), backward);
    }

    #[test]
    fn self_diff_has_no_changes(doc in mapping_strategy()) {
        let diff = DiffEngine::new().compare(&doc, &doc).unwrap();
        prop_assert!(!diff.has_changes());

        let summary = DiffSummary::from_diff(&diff);
        prop_assert_eq!(summary.added + summary.removed + summary.changed, 0);
    }

    #[test]
    fn unlimited_depth_matches_default(left in mapping_strategy(), right in mapping_strategy()) {
        let bounded = DiffEngine::new().compare(&left, &right).unwrap();
        let unbounded = DiffEngine::new().with_max_depth(0).compare(&left, &right).unwrap();
        prop_assert_eq!(bounded, unbounded);
    }
}
