//! Error types for gray8-core operations.
//!
//! Only resource failures are reported through [`Error`]. Geometric
//! preconditions (pixel positions, rectangles, non-zero max gray) are
//! contracts checked with assertions: violating one is a caller bug and
//! panics instead of being silently clamped.
//!
//! # Usage
//!
//! ```rust
//! use gray8_core::{Error, GrayImage, Result};
//!
//! fn make_canvas() -> Result<GrayImage> {
//!     GrayImage::new(640, 480, 255)
//! }
//!
//! match make_canvas() {
//!     Ok(img) => assert_eq!(img.width(), 640),
//!     Err(e) if e.is_allocation_error() => eprintln!("out of memory: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! # Used By
//!
//! - [`crate::image::GrayImage`] - Buffer allocation
//! - `gray8-ops` - Allocating geometric transforms and blur snapshots
//! - `gray8-io` - Wrapped as `IoError::Core` when decoding

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating or duplicating image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Memory allocation failed.
    ///
    /// Returned when the pixel buffer cannot be obtained, either because the
    /// allocator refused the request or because `width * height` does not fit
    /// in the address space. No partially built image is ever returned.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// Raw pixel data does not match the declared dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failed() {
        let err = Error::allocation_failed(1024 * 1024 * 1024, "out of memory");
        assert!(err.to_string().contains("out of memory"));
        assert!(err.to_string().contains("1073741824"));
        assert!(err.is_allocation_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 3, "expected 12 bytes, got 10");
        let msg = err.to_string();
        assert!(msg.contains("4x3"));
        assert!(msg.contains("expected 12 bytes"));
        assert!(!err.is_allocation_error());
    }
}
