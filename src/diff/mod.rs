//! Structural diff engine for generic documents.
//!
//! The engine walks two [`Node`](crate::model::Node) mappings level by level.
//! At each level it takes the union of both key sets, sorts it in byte order
//! and classifies every key, first matching rule wins:
//!
//! 1. missing on the right: `Removed`
//! 2. missing on the left: `Added`
//! 3. a mapping on both sides: `Nested`, recursing one level down
//! 4. values differ: `Changed`
//! 5. otherwise: `Unchanged`
//!
//! # Example
//!
//! ```
//! use gendiff::diff::DiffEngine;
//! use gendiff::model::{DiffNode, Node};
//!
//! let old = Node::from(serde_json::json!({"port": 80, "host": "a"}));
//! let new = Node::from(serde_json::json!({"port": 8080, "host": "a"}));
//!
//! let diff = DiffEngine::new().compare(&old, &new).unwrap();
//! assert!(matches!(diff.children()[1], DiffNode::Changed { .. }));
//! ```

mod engine;
mod summary;

pub use engine::{compare, DiffEngine, DEFAULT_MAX_DEPTH};
pub use summary::DiffSummary;
