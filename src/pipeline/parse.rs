//! Document parsing stage.

use super::PipelineError;
use crate::error::GendiffError;
use crate::model::Node;
use crate::parsers::{parse_document, DocumentFormat};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// A parsed document together with where it came from
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The document tree
    pub document: Node,
    /// Source path
    pub path: PathBuf,
    /// Format selected by extension, `None` when detected from content
    pub format: Option<DocumentFormat>,
}

impl ParsedDocument {
    #[must_use]
    pub const fn new(document: Node, path: PathBuf, format: Option<DocumentFormat>) -> Self {
        Self {
            document,
            path,
            format,
        }
    }

    /// Get a reference to the document tree
    #[must_use]
    pub const fn document(&self) -> &Node {
        &self.document
    }

    /// Number of top-level keys, or 0 for a non-mapping root
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.document.as_mapping().map_or(0, indexmap::IndexMap::len)
    }

    /// Consume and return the inner tree
    #[must_use]
    pub fn into_document(self) -> Node {
        self.document
    }
}

/// Parse a document with context for error messages
pub fn parse_document_with_context(path: &Path, quiet: bool) -> Result<ParsedDocument> {
    if !quiet {
        tracing::info!("Parsing document: {}", path.display());
    }

    let document = parse_document(path).map_err(|e| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source: GendiffError::parse(format!("reading {}", path.display()), e).into(),
    })?;
    let parsed = ParsedDocument::new(document, path.to_path_buf(), DocumentFormat::from_path(path));

    if !quiet {
        tracing::info!("Parsed {} top-level keys", parsed.key_count());
    }

    Ok(parsed)
}
