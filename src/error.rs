//! Unified error types for gendiff.
//!
//! The diff core only ever raises [`DiffErrorKind`] errors; parsing and
//! rendering adapters bring their own error enums which are wrapped here so
//! callers can handle a single type.

use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gendiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GendiffError {
    /// A document could not be read or turned into a generic tree
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors during diff computation
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific diff error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffErrorKind {
    /// A document root handed to the engine is not a mapping.
    #[error("{side} document must be a mapping at the root, found {found}")]
    InvalidInputKind { side: Side, found: &'static str },

    /// Nesting went past the engine's depth ceiling.
    #[error("documents are nested deeper than the limit of {limit} levels")]
    TooDeep { limit: usize },
}

/// Which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for gendiff operations
pub type Result<T> = std::result::Result<T, GendiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GendiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffErrorKind) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a diff error for a root that is not a mapping
    pub fn invalid_input_kind(side: Side, found: &'static str) -> Self {
        Self::diff(
            "comparing document roots",
            DiffErrorKind::InvalidInputKind { side, found },
        )
    }

    /// Create a diff error for input nested past `limit`
    pub fn too_deep(key_path: impl Into<String>, limit: usize) -> Self {
        Self::diff(
            format!("at '{}'", key_path.into()),
            DiffErrorKind::TooDeep { limit },
        )
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The diff error kind, if this is a diff error
    #[must_use]
    pub fn diff_kind(&self) -> Option<&DiffErrorKind> {
        match self {
            Self::Diff { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GendiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for GendiffError {
    fn from(err: ParseError) -> Self {
        Self::parse("", err)
    }
}

impl From<ReportError> for GendiffError {
    fn from(err: ReportError) -> Self {
        Self::report("", err)
    }
}

impl From<DiffErrorKind> for GendiffError {
    fn from(err: DiffErrorKind) -> Self {
        Self::diff("", err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain rather than replace, so an error that bubbles up
/// through several layers reads `"outer: middle: inner"`.
///
/// # Example
///
/// ```ignore
/// use gendiff::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Node> {
///     parse_document(path).with_context(|| format!("loading {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GendiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: GendiffError, new_ctx: &str) -> GendiffError {
    match err {
        GendiffError::Parse {
            context: existing,
            source,
        } => GendiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GendiffError::Diff {
            context: existing,
            source,
        } => GendiffError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GendiffError::Report {
            context: existing,
            source,
        } => GendiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GendiffError::Io {
            path,
            message,
            source,
        } => GendiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        GendiffError::Config(msg) => GendiffError::Config(chain_context(new_ctx, &msg)),
        GendiffError::Validation(msg) => GendiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| GendiffError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| GendiffError::Validation(f().into()))
    }
}
