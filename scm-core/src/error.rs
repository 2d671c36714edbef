//! Error types for scm-core

use thiserror::Error;

/// Result alias used throughout scm-core
pub type ScmResult<T> = Result<T, ScmError>;

/// Top-level error type for scm-core
#[derive(Error, Debug)]
pub enum ScmError {
    /// A provider with the same id is already registered
    #[error("SCM Provider {0} already exists.")]
    DuplicateProvider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScmError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
