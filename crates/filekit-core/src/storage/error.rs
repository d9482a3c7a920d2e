//! # Filekit Storage Errors
//!
//! Defines the error type shared by every filesystem helper in this crate.
//!
//! [`FsError`] covers failed I/O calls (always tagged with the operation name
//! and the path involved), failed stream copies, directory creation failures, malformed paths and
//! configuration (de)serialization problems.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("I/O error during operation '{operation}' on path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create the directories: {}", .0.display())]
    CreateDirFailed(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid path provided: '{}': {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Serialization to '{format}' failed: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    Deserialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("I/O error during stream operation '{operation}': {source}")]
    Stream {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

// Helper for creating Io errors, ensuring path is always included.
impl FsError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        FsError::Io {
            source,
            operation: operation.into(),
            path: path.into(),
        }
    }

    pub fn stream(source: std::io::Error, operation: impl Into<String>) -> Self {
        FsError::Stream { source, operation: operation.into() }
    }

    /// The underlying `std::io::ErrorKind`, if this wraps an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FsError::Io { source, .. } | FsError::Stream { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Shorthand for Result with our error type
pub type Result<T> = std::result::Result<T, FsError>;
