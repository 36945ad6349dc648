//! Error types for flutter-assets-codegen
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for codegen operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// A declared asset pattern that could not be turned into files
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The pattern exists but is neither a regular file nor a directory
    #[error("asset '{pattern}' is neither a file nor a directory ({path})")]
    NotFileOrDirectory { pattern: String, path: PathBuf },

    /// Stat (or directory listing) failed for the pattern
    #[error("asset '{pattern}' could not be resolved: {source}")]
    Stat {
        pattern: String,
        #[source]
        source: FsError,
    },
}

impl ResolutionError {
    /// The manifest-declared pattern this error belongs to
    pub fn pattern(&self) -> &str {
        match self {
            ResolutionError::NotFileOrDirectory { pattern, .. }
            | ResolutionError::Stat { pattern, .. } => pattern,
        }
    }
}

/// Main error type for codegen operations
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The manifest itself could not be stat'ed or read
    #[error("cannot read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A declared asset could not be resolved
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The generated file could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Workspace walk failed
    #[error("cannot search workspace {root}: {message}")]
    Discovery { root: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
