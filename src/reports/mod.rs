//! Report generation for diff trees.
//!
//! This module renders a [`DiffNode`] tree in several formats:
//! - Stylish: indented tree with `+`/`-` markers (default)
//! - Plain: one sentence per changed property, keyed by dotted path
//! - JSON: the diff tree itself, for programmatic consumers
//! - Summary: compact counts for shell usage

mod json;
mod plain;
mod stylish;
mod summary;
mod types;

pub use json::JsonReporter;
pub use plain::PlainReporter;
pub use stylish::StylishReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::{DiffNode, Node};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Expected a root diff node, got '{0}'")]
    NotRoot(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a diff tree. `diff` must be a [`DiffNode::Root`].
    fn generate(&self, diff: &DiffNode, config: &ReportConfig) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        diff: &DiffNode,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(diff, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, false)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Stylish => Box::new(StylishReporter::new().colored(use_color)),
        ReportFormat::Plain => Box::new(PlainReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => Box::new(SummaryReporter::new().colored(use_color)),
    }
}

/// Children of the root, or an error for any other node.
fn root_children(diff: &DiffNode) -> Result<&[DiffNode], ReportError> {
    match diff {
        DiffNode::Root { children } => Ok(children),
        other => Err(ReportError::NotRoot(other.kind().to_string())),
    }
}

/// Render a scalar the way the text formats show it: strings bare,
/// everything else as its JSON literal.
fn scalar_text(node: &Node) -> Result<String, ReportError> {
    Ok(match node {
        Node::Null => "null".to_string(),
        Node::Bool(b) => b.to_string(),
        Node::Number(n) => n.to_string(),
        Node::String(s) => s.clone(),
        Node::List(_) | Node::Mapping(_) => serde_json::to_string(node)
            .map_err(|e| ReportError::SerializationError(e.to_string()))?,
    })
}

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}
