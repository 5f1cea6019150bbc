//! # gray8-ops
//!
//! Image operations on [`GrayImage`](gray8_core::GrayImage) buffers.
//!
//! # Modules
//!
//! - [`point`] - In-place per-pixel transforms (negative, threshold, brighten)
//! - [`transform`] - Geometric transforms returning new images (rotate, mirror, crop)
//! - [`composite`] - Two-image operations (paste, alpha blend)
//! - [`search`] - Exact sub-image matching and location
//! - [`filter`] - Clipped-window mean blur
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::{filter, point, search, transform};
//!
//! let mut img = GrayImage::from_raw(4, 2, 255, (0..8).map(|v| v * 30).collect())?;
//! point::negative(&mut img);
//!
//! let patch = transform::crop(&img, 1, 0, 2, 2)?;
//! assert_eq!(search::locate(&img, &patch), Some((1, 0)));
//!
//! filter::blur(&mut img, 1, 1)?;
//! # Ok::<(), gray8_core::Error>(())
//! ```
//!
//! # Errors
//!
//! Operations that allocate return [`gray8_core::Result`]; the only runtime
//! failure is allocation. Geometric preconditions are asserted.
//!
//! # Feature Flags
//!
//! - `parallel` - Compute blur rows with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod composite;
pub mod filter;
pub mod point;
pub mod search;
pub mod transform;

#[cfg(feature = "parallel")]
mod parallel;

pub use gray8_core::{Error, Result};

/// Rounds half up (add 0.5, truncate toward zero) and saturates to the byte
/// range.
#[inline]
pub(crate) fn round_to_u8(value: f64) -> u8 {
    (value + 0.5).trunc().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::round_to_u8;

    #[test]
    fn test_round_to_u8() {
        assert_eq!(round_to_u8(0.0), 0);
        assert_eq!(round_to_u8(2.49), 2);
        assert_eq!(round_to_u8(2.5), 3);
        assert_eq!(round_to_u8(254.7), 255);
        assert_eq!(round_to_u8(300.0), 255);
        assert_eq!(round_to_u8(-40.0), 0);
        // truncation toward zero: -0.9 + 0.5 = -0.4 -> 0
        assert_eq!(round_to_u8(-0.9), 0);
        assert_eq!(round_to_u8(f64::NAN), 0);
    }
}
