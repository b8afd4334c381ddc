//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod diff;

pub use diff::run_diff;

// Re-export config types used by handlers
pub use crate::config::DiffConfig;
