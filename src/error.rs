//! Error types for server-env operations.
//!
//! This module defines [`ServerEnvError`], the error type returned by the
//! env file loaders and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Environment resolution and variable lookup never fail: a missing or
//!   non-numeric variable defaults instead of erroring
//! - Only loading env files from disk produces errors
//! - Use `anyhow::Error` (via `ServerEnvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for server-env operations.
#[derive(Debug, Error)]
pub enum ServerEnvError {
    /// A configured env file does not exist.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// An env file could not be parsed.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvFileParse { path: PathBuf, message: String },

    /// A value given on the command line is not an environment code.
    #[error("Invalid environment code: {value}")]
    InvalidEnvironmentCode { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for server-env operations.
pub type Result<T> = std::result::Result<T, ServerEnvError>;
