//! Stylish report generator.
//!
//! Renders the diff as a brace-delimited tree. Each level indents by four
//! spaces and the change marker sits two columns left of the key:
//!
//! ```text
//! {
//!     common: {
//!       + follow: false
//!         setting1: Value 1
//!       - setting2: 200
//!     }
//! }
//! ```

use super::{
    ansi_color, root_children, scalar_text, ReportConfig, ReportError, ReportFormat,
    ReportGenerator,
};
use crate::model::{DiffNode, Node};

const INDENT_WIDTH: usize = 4;
const MARKER_WIDTH: usize = 2;

/// The two columns left of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Added,
    Removed,
    Unchanged,
}

impl Marker {
    fn render(self, colored: bool) -> String {
        match self {
            Self::Added => ansi_color("+ ", "green", colored),
            Self::Removed => ansi_color("- ", "red", colored),
            Self::Unchanged => "  ".to_string(),
        }
    }
}

/// Stylish tree reporter
pub struct StylishReporter {
    colored: bool,
}

impl StylishReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: false }
    }

    /// Color `+` markers green and `-` markers red
    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn render_entries(
        &self,
        entries: &[DiffNode],
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), ReportError> {
        for entry in entries {
            match entry {
                DiffNode::Added { key, value } => {
                    self.line(out, depth, Marker::Added, key, value)?;
                }
                DiffNode::Removed { key, value } => {
                    self.line(out, depth, Marker::Removed, key, value)?;
                }
                DiffNode::Changed {
                    key,
                    old_value,
                    new_value,
                } => {
                    self.line(out, depth, Marker::Removed, key, old_value)?;
                    self.line(out, depth, Marker::Added, key, new_value)?;
                }
                DiffNode::Unchanged { key, value } => {
                    self.line(out, depth, Marker::Unchanged, key, value)?;
                }
                DiffNode::Nested { key, children } => {
                    let marker = Marker::Unchanged.render(self.colored);
                    out.push(format!("{}{key}: {{", key_indent(depth, &marker)));
                    self.render_entries(children, depth + 1, out)?;
                    out.push(format!("{}}}", " ".repeat(depth * INDENT_WIDTH)));
                }
                DiffNode::Root { children } => self.render_entries(children, depth, out)?,
            }
        }
        Ok(())
    }

    fn line(
        &self,
        out: &mut Vec<String>,
        depth: usize,
        marker: Marker,
        key: &str,
        value: &Node,
    ) -> Result<(), ReportError> {
        out.push(format!(
            "{}{key}: {}",
            key_indent(depth, &marker.render(self.colored)),
            render_value(value, depth)?
        ));
        Ok(())
    }
}

impl Default for StylishReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Indentation for a key line at `depth`, with `marker` in the last two columns.
fn key_indent(depth: usize, marker: &str) -> String {
    format!("{}{marker}", " ".repeat(depth * INDENT_WIDTH - MARKER_WIDTH))
}

/// Render a value that belongs to a key at `depth`. Mappings open a block
/// whose entries sit one level deeper.
fn render_value(value: &Node, depth: usize) -> Result<String, ReportError> {
    let Node::Mapping(map) = value else {
        return scalar_text(value);
    };
    let mut lines = vec!["{".to_string()];
    for (key, inner) in map {
        lines.push(format!(
            "{}{key}: {}",
            " ".repeat((depth + 1) * INDENT_WIDTH),
            render_value(inner, depth + 1)?
        ));
    }
    lines.push(format!("{}}}", " ".repeat(depth * INDENT_WIDTH)));
    Ok(lines.join("\n"))
}

impl ReportGenerator for StylishReporter {
    fn generate(&self, diff: &DiffNode, _config: &ReportConfig) -> Result<String, ReportError> {
        let children = root_children(diff)?;
        let mut lines = vec!["{".to_string()];
        self.render_entries(children, 1, &mut lines)?;
        lines.push("}".to_string());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Stylish
    }
}
