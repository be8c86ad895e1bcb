use std::path::PathBuf;
use thiserror::Error;

/// Main error type for probe file discovery
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Can't open path {}: {source}", .path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't read metadata of {}: {source}", .path.display())]
    FileMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a probe file name: {0:?}")]
    InvalidFilename(String),

    #[error("Path too long: {len} bytes exceeds limit of {limit} bytes")]
    PathTooLong { len: usize, limit: usize },

    #[error("Out of memory: {0}")]
    ResourceExhaustion(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl From<std::collections::TryReserveError> for ProbeError {
    fn from(err: std::collections::TryReserveError) -> Self {
        ProbeError::ResourceExhaustion(err.to_string())
    }
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
