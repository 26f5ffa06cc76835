//! Error types for formpack
//!
//! Uses `thiserror` for library errors. Command handlers wrap these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::compiler::CompileError;

/// Result type alias for formpack operations
pub type FormpackResult<T> = Result<T, FormpackError>;

/// Main error type for formpack operations
#[derive(Error, Debug)]
pub enum FormpackError {
    /// Template source directory does not exist (fatal at startup)
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A single template file could not be read
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single template failed to compile
    #[error(transparent)]
    Compile(#[from] Box<CompileError>),

    /// The bundle could not be written to its destination
    #[error("failed to write bundle to {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// The filesystem watcher could not be set up
    #[error("failed to watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CompileError> for FormpackError {
    fn from(err: CompileError) -> Self {
        FormpackError::Compile(Box::new(err))
    }
}
