//! # gray8-io
//!
//! File I/O for [`GrayImage`](gray8_core::GrayImage).
//!
//! Binary PGM (`P5`, 8-bit) is the only supported format. The [`pgm`] module
//! works on byte slices as well as files; [`read`] and [`write`] pick the
//! format from the file extension.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gray8_io::{read, write};
//!
//! let image = read("input.pgm")?;
//! println!("Size: {}x{}", image.width(), image.height());
//! write("copy.pgm", &image)?;
//! # Ok::<(), gray8_io::IoError>(())
//! ```
//!
//! # Instrumentation
//!
//! Loading and saving each record `width * height` pixel accesses in
//! [`gray8_core::instrument`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod pgm;

pub use detect::Format;
pub use error::{IoError, IoResult};

use gray8_core::GrayImage;
use std::path::Path;

/// Reads an image from a file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown extensions, otherwise
/// whatever the format reader reports.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Pgm => pgm::read(path),
        Format::Unknown => Err(IoError::UnsupportedFormat(format!(
            "cannot read {}: expected a .pgm file",
            path.display()
        ))),
    }
}

/// Writes an image to a file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown extensions, otherwise
/// whatever the format writer reports.
pub fn write<P: AsRef<Path>>(path: P, image: &GrayImage) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Pgm => pgm::write(path, image),
        Format::Unknown => Err(IoError::UnsupportedFormat(format!(
            "cannot write {}: expected a .pgm file",
            path.display()
        ))),
    }
}
