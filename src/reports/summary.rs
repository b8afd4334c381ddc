//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ansi_color, root_children, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffSummary;
use crate::model::DiffNode;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: false }
    }

    /// Enable or disable colored output
    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, diff: &DiffNode, config: &ReportConfig) -> Result<String, ReportError> {
        root_children(diff)?;
        let summary = DiffSummary::from_diff(diff);
        let mut lines = Vec::new();

        lines.push(self.color("Document Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let (Some(left), Some(right)) = (
            config.metadata.left_path.as_deref(),
            config.metadata.right_path.as_deref(),
        ) {
            lines.push(format!("{}  {left} → {right}", self.color("Files:", "cyan")));
        }

        lines.push(format!(
            "{}  {} added  {} removed  {} changed",
            self.color("Keys:", "cyan"),
            self.color(&format!("+{}", summary.added), "green"),
            self.color(&format!("-{}", summary.removed), "red"),
            self.color(&format!("~{}", summary.changed), "yellow"),
        ));
        lines.push(format!(
            "{}  {} unchanged, {} nested",
            self.color("Other:", "cyan"),
            summary.unchanged,
            summary.nested
        ));

        let status = if summary.has_changes() {
            self.color(&format!("{} change(s)", summary.total_changes()), "yellow")
        } else {
            self.color("no changes", "green")
        };
        lines.push(format!("{}  {status}", self.color("Result:", "cyan")));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
