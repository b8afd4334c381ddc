//! Report output stage.
//!
//! Renders the diff tree in the configured format and writes it out.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::DiffConfig;
use crate::error::GendiffError;
use crate::model::DiffNode;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::Result;

/// Render the diff for `config` without writing it anywhere.
pub fn render_report(config: &DiffConfig, diff: &DiffNode, use_color: bool) -> Result<String> {
    let report_config = ReportConfig {
        include_unchanged: config.output.include_unchanged,
        metadata: ReportMetadata::new().with_paths(
            config.paths.left.display().to_string(),
            config.paths.right.display().to_string(),
        ),
    };

    let reporter = create_reporter_with_options(config.output.format, use_color);
    reporter.generate(diff, &report_config).map_err(|e| {
        PipelineError::ReportFailed {
            source: GendiffError::report(
                format!("rendering {} report", config.output.format),
                e,
            )
            .into(),
        }
        .into()
    })
}

/// Output a diff report to the configured destination.
pub fn output_report(config: &DiffConfig, diff: &DiffNode) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let report = render_report(config, diff, use_color)?;
    write_output(&report, &target, config.behavior.quiet)
}
