//! Error types for I/O operations.
//!
//! Filesystem failures, malformed headers and truncated rasters all surface
//! as [`IoError`]; allocation failures from the core image type are wrapped
//! unchanged.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Unsupported bit depth.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Image construction failed.
    #[error(transparent)]
    Core(#[from] gray8_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

impl IoError {
    /// Wraps a filesystem error with the operation and path that failed.
    pub(crate) fn context(op: &str, path: &std::path::Path, err: io::Error) -> Self {
        IoError::Io(io::Error::new(
            err.kind(),
            format!("{op} {}: {err}", path.display()),
        ))
    }
}
