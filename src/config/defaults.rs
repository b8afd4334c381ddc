//! Default values and presets for gendiff.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, DiffSettings, OutputConfig};
use crate::reports::ReportFormat;

/// Largest accepted `diff.max_depth`. Deeper settings are rejected by validation.
pub const MAX_DEPTH_LIMIT: usize = 1024;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Stylish tree on the terminal
    Default,
    /// CI/CD: machine-readable output, fail on changes
    CiCd,
    /// Review: every key listed in plain sentences, no depth ceiling
    Review,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Review => "review",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            "review" | "audit" => Some(Self::Review),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Stylish tree output suitable for interactive use",
            Self::CiCd => "JSON output without color that fails when documents differ",
            Self::Review => "Plain sentences for every key, unchanged ones included",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Review]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    no_color: true,
                    ..OutputConfig::default()
                },
                behavior: BehaviorConfig {
                    fail_on_change: true,
                    quiet: true,
                },
                ..Self::default()
            },
            ConfigPreset::Review => Self {
                output: OutputConfig {
                    format: ReportFormat::Plain,
                    include_unchanged: true,
                    ..OutputConfig::default()
                },
                diff: DiffSettings { max_depth: 0 },
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("audit"), Some(ConfigPreset::Review));
        assert_eq!(ConfigPreset::from_name("fast"), None);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_change);
    }

    #[test]
    fn test_review_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Review);
        assert_eq!(config.output.format, ReportFormat::Plain);
        assert!(config.output.include_unchanged);
        assert_eq!(config.diff.max_depth, 0);
    }
}
