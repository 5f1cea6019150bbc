//! # gray8-core
//!
//! Core types for 8-bit grayscale image processing.
//!
//! This crate provides the foundation used throughout the gray8 workspace:
//!
//! - [`GrayImage`] - Dense row-major 8-bit pixel buffer with bounds contracts
//! - [`Rect`] - Region type for crops, pastes and sub-image offsets
//! - [`Error`] - Allocation and construction failures
//! - [`instrument`] - Thread-local pixel access / comparison counters
//!
//! ## Crate Structure
//!
//! ```text
//! gray8-core (this crate)
//!    ^
//!    |
//!    +-- gray8-ops (point, geometry, composite, search, blur)
//!    +-- gray8-io (PGM codec)
//!    +-- gray8-cli (command-line tool)
//! ```
//!
//! ## Feature Flags
//!
//! - `instrument` - Enable pixel access and comparison counters (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod instrument;
pub mod rect;

pub use error::*;
pub use image::*;
pub use instrument::Counters;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// ```
/// use gray8_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{GrayImage, PIX_MAX};
    pub use crate::instrument::Counters;
    pub use crate::rect::Rect;
}
