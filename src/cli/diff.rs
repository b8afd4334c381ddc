//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two documents.

use crate::config::{DiffConfig, Validatable};
use crate::diff::DiffSummary;
use crate::model::DiffNode;
use crate::pipeline::{compute_diff, exit_codes, output_report, parse_document_with_context};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let quiet = config.behavior.quiet;

    let left = parse_document_with_context(&config.paths.left, quiet)?;
    let right = parse_document_with_context(&config.paths.right, quiet)?;

    let diff = compute_diff(&config, left.document(), right.document())?;
    let exit_code = determine_exit_code(&config, &diff);

    output_report(&config, &diff)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, diff: &DiffNode) -> i32 {
    if config.behavior.fail_on_change && DiffSummary::from_diff(diff).has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::model::Node;
    use std::path::PathBuf;

    fn config(fail_on_change: bool) -> DiffConfig {
        DiffConfigBuilder::new()
            .left_path(PathBuf::from("a.json"))
            .right_path(PathBuf::from("b.json"))
            .fail_on_change(fail_on_change)
            .build()
            .unwrap()
    }

    #[test]
    fn test_exit_code_requires_flag_and_changes() {
        let changed = DiffNode::Root {
            children: vec![DiffNode::Removed {
                key: "a".into(),
                value: Node::Null,
            }],
        };
        let unchanged = DiffNode::Root {
            children: vec![DiffNode::Unchanged {
                key: "a".into(),
                value: Node::Null,
            }],
        };

        assert_eq!(determine_exit_code(&config(true), &changed), exit_codes::CHANGES_DETECTED);
        assert_eq!(determine_exit_code(&config(false), &changed), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(&config(true), &unchanged), exit_codes::SUCCESS);
    }

    #[test]
    fn test_invalid_config_rejected_before_parsing() {
        let config = DiffConfigBuilder::new()
            .left_path(PathBuf::from("/nonexistent/a.json"))
            .right_path(PathBuf::from("/nonexistent/b.json"))
            .max_depth(usize::MAX)
            .build()
            .unwrap();
        let err = run_diff(config).unwrap_err();
        assert!(err.to_string().contains("diff.max_depth"));
    }
}
