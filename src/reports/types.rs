//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brace-delimited tree with +/- markers
    #[default]
    Stylish,
    /// One sentence per changed property
    Plain,
    /// Structured JSON diff tree
    Json,
    /// Counts of added, removed and changed keys
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stylish => write!(f, "stylish"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Also list unchanged keys where the format normally omits them
    pub include_unchanged: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Left (old) document path
    pub left_path: Option<String>,
    /// Right (new) document path
    pub right_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Set both document paths
    #[must_use]
    pub fn with_paths(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_path = Some(left.into());
        self.right_path = Some(right.into());
        self
    }
}
