//! Configuration module for gendiff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use gendiff::config::{AppConfig, ConfigPreset};
//! use gendiff::reports::ReportFormat;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let ci = AppConfig::from_preset(ConfigPreset::CiCd);
//! assert!(ci.behavior.fail_on_change);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Plain)
//!     .max_depth(32)
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.gendiff.yaml` file in your project root or `~/.config/gendiff/`:
//!
//! ```yaml
//! output:
//!   format: plain
//! behavior:
//!   fail_on_change: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, MAX_DEPTH_LIMIT};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths,
    DiffSettings, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.gendiff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = value["properties"].as_object().unwrap();
        for section in ["output", "diff", "behavior"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
        assert!(schema.contains("\"stylish\""));
    }
}
