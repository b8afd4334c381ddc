//! **Structural diffs for JSON and YAML documents.**
//!
//! `gendiff` compares two hierarchical documents key by key and produces a
//! tree that records, for every key at every nesting level, whether it was
//! added, removed, changed, left unchanged, or nested into a sub-comparison.
//! The same library powers the `gendiff` command-line tool.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the generic document tree [`Node`] and the diff tree [`DiffNode`].
//! - **[`diff`]**: home of the [`DiffEngine`], which compares two mappings.
//! - **[`parsers`]**: JSON and YAML parsers producing [`Node`] trees, with
//!   extension- and content-based format detection.
//! - **[`reports`]**: renderers turning a [`DiffNode`] into stylish, plain,
//!   JSON or summary text.
//! - **[`pipeline`]**: parse → diff → report orchestration used by the CLI.
//! - **[`config`]**: typed configuration, config file discovery and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use gendiff::{gen_diff, ReportFormat};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = gen_diff(
//!         Path::new("before.json"),
//!         Path::new("after.yml"),
//!         ReportFormat::Stylish,
//!     )?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ### Diffing In-Memory Trees
//!
//! ```
//! use gendiff::{DiffEngine, DiffKind, Node};
//! use serde_json::json;
//!
//! let left = Node::from(json!({"host": "example.org", "timeout": 50}));
//! let right = Node::from(json!({"host": "example.org", "timeout": 20, "verbose": true}));
//!
//! let diff = DiffEngine::new().compare(&left, &right).unwrap();
//! let kinds: Vec<DiffKind> = diff.children().iter().map(|c| c.kind()).collect();
//! assert_eq!(kinds, [DiffKind::Unchanged, DiffKind::Changed, DiffKind::Added]);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `left`/`right` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

use std::path::Path;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, DiffSettings, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, DiffConfigBuilder};
pub use diff::{compare, DiffEngine, DiffSummary, DEFAULT_MAX_DEPTH};
pub use error::{DiffErrorKind, ErrorContext, GendiffError, OptionContext, Result, Side};
pub use model::{DiffKind, DiffNode, Mapping, Node};
pub use parsers::{parse_document, parse_document_str, DocumentFormat, DocumentParser};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};

/// Parse two documents, compare them and render the diff in `format`.
///
/// Uses the default depth ceiling and no colors.
pub fn gen_diff(left: &Path, right: &Path, format: ReportFormat) -> Result<String> {
    let left_doc = parse_document(left).with_context(|| format!("reading {}", left.display()))?;
    let right_doc =
        parse_document(right).with_context(|| format!("reading {}", right.display()))?;

    let diff = DiffEngine::new().compare(&left_doc, &right_doc)?;

    let config = ReportConfig {
        metadata: reports::ReportMetadata::new()
            .with_paths(left.display().to_string(), right.display().to_string()),
        ..ReportConfig::default()
    };
    reports::create_reporter(format)
        .generate(&diff, &config)
        .with_context(|| format!("rendering {format} report"))
}
