//! Configuration types for gendiff operations.
//!
//! Provides structured configuration for the diff command and the config file.

use super::defaults::MAX_DEPTH_LIMIT;
use crate::diff::DEFAULT_MAX_DEPTH;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Comparison settings
    pub diff: DiffSettings,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// List unchanged keys in formats that normally skip them.
    pub const fn include_unchanged(mut self, include: bool) -> Self {
        self.config.output.include_unchanged = include;
        self
    }

    /// Set the nesting ceiling (0 for unlimited).
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.config.diff.max_depth = depth;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Comparison settings
    pub diff: DiffSettings,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl DiffConfig {
    /// Runtime configuration for comparing `left` and `right` with `app` settings.
    #[must_use]
    pub fn from_app(app: AppConfig, left: PathBuf, right: PathBuf) -> Self {
        Self {
            paths: DiffPaths { left, right },
            output: app.output,
            diff: app.diff,
            behavior: app.behavior,
        }
    }
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the left (old) document
    pub left: PathBuf,
    /// Path to the right (new) document
    pub right: PathBuf,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// List unchanged keys in the plain format
    pub include_unchanged: bool,
}

/// Settings for the comparison itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffSettings {
    /// Deepest nesting level compared before giving up (0 for unlimited)
    pub max_depth: usize,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiffSettings {
    /// Whether `max_depth` is within what the engine accepts.
    #[must_use]
    pub const fn depth_in_range(&self) -> bool {
        self.max_depth <= MAX_DEPTH_LIMIT
    }
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    output: OutputConfig,
    diff: DiffSettings,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn left_path(mut self, path: PathBuf) -> Self {
        self.left = Some(path);
        self
    }

    #[must_use]
    pub fn right_path(mut self, path: PathBuf) -> Self {
        self.right = Some(path);
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn include_unchanged(mut self, include: bool) -> Self {
        self.output.include_unchanged = include;
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.diff.max_depth = depth;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let left = self.left.ok_or_else(|| anyhow::anyhow!("left path is required"))?;
        let right = self
            .right
            .ok_or_else(|| anyhow::anyhow!("right path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { left, right },
            output: self.output,
            diff: self.diff,
            behavior: self.behavior,
        })
    }
}
