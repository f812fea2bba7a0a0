//! Unified error types for docdiff.
//!
//! The comparison engine itself never returns these to callers: parse
//! failures are downgraded into a [`CompareResult`](crate::CompareResult)
//! with `has_parse_error` set. Parsers report a bare [`ParseErrorKind`];
//! [`DocDiffError`] covers the input pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocDiffError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeded the configured size ceiling
    #[error("Input {path:?} is {size} bytes, exceeding the {limit} byte limit")]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Content does not look like XML")]
    NotXml,

    #[error("Document is empty")]
    EmptyDocument,
}

/// Convenient Result type for docdiff operations
pub type Result<T> = std::result::Result<T, DocDiffError>;

impl DocDiffError {
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
}

impl From<std::io::Error> for DocDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first:
/// `"reading left input: <original context>"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DocDiffError>> ErrorContext<T> for std::result::Result<T, E> {
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

fn add_context_to_error(err: DocDiffError, new_ctx: &str) -> DocDiffError {
    match err {
        DocDiffError::Io {
            path,
            message,
            source,
        } => DocDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DocDiffError::Validation(msg) => DocDiffError::Validation(chain_context(new_ctx, &msg)),
        other @ DocDiffError::InputTooLarge { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
