//! Diff computation stage.
//!
//! Builds the engine from the configured settings and runs the comparison.

use super::PipelineError;
use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffSummary};
use crate::model::{DiffNode, Node};
use anyhow::Result;

/// Run the core diff computation between two documents.
pub fn compute_diff(config: &DiffConfig, left: &Node, right: &Node) -> Result<DiffNode> {
    let quiet = config.behavior.quiet;

    if !quiet {
        tracing::info!("Computing structural diff...");
    }

    let engine = DiffEngine::new().with_max_depth(config.diff.max_depth);
    let diff = engine
        .compare(left, right)
        .map_err(|e| PipelineError::DiffFailed { source: e.into() })?;

    if !quiet {
        let summary = DiffSummary::from_diff(&diff);
        tracing::info!(
            "Diff complete: {} changes ({} added, {} removed, {} changed)",
            summary.total_changes(),
            summary.added,
            summary.removed,
            summary.changed
        );
    }

    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::error::{DiffErrorKind, GendiffError};
    use serde_json::json;
    use std::path::PathBuf;

    fn config(max_depth: usize) -> DiffConfig {
        DiffConfigBuilder::new()
            .left_path(PathBuf::from("l.json"))
            .right_path(PathBuf::from("r.json"))
            .max_depth(max_depth)
            .quiet(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_compute_diff() {
        let left = Node::from(json!({"a": 1}));
        let right = Node::from(json!({"a": 2}));
        let diff = compute_diff(&config(0), &left, &right).unwrap();
        assert!(diff.has_changes());
    }

    #[test]
    fn test_depth_setting_applies() {
        let left = Node::from(json!({"a": {"b": {"c": 1}}}));
        let right = Node::from(json!({"a": {"b": {"c": 2}}}));
        let err = compute_diff(&config(1), &left, &right).unwrap_err();

        let pipeline = err.downcast_ref::<PipelineError>().unwrap();
        let PipelineError::DiffFailed { source } = pipeline else {
            panic!("expected DiffFailed, got {pipeline:?}");
        };
        let gendiff = source.downcast_ref::<GendiffError>().unwrap();
        assert_eq!(
            gendiff.diff_kind(),
            Some(&DiffErrorKind::TooDeep { limit: 1 })
        );
    }
}
