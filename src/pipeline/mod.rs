//! Pipeline orchestration for document diffs.
//!
//! This module provides shared orchestration logic for parse → diff → report
//! workflows, keeping the CLI command handlers thin.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{parse_document_with_context, ParsedDocument};
pub use report_stage::{output_report, render_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a document
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Diff computation failed
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected, or `--fail-on-change` not set
    pub const SUCCESS: i32 = 0;
    /// Changes were detected with `--fail-on-change`
    pub const CHANGES_DETECTED: i32 = 1;
}
