//! Error types for catalog-lint operations.
//!
//! This module defines [`LintError`], the error type for failures that stop
//! a lint run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Broken references and unparseable frontmatter are *findings*, reported as
//!   [`ValidationError`](crate::lint::ValidationError) values, never as `Err`
//! - Use `LintError` for conditions that prevent linting at all (missing
//!   catalog, bad config, unreadable files)
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error for a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    /// Catalog directory does not exist.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Explicitly requested configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but contains invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An ignore pattern is not a valid glob.
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for catalog-lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
