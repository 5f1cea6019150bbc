//! Per-pixel transforms applied in place.
//!
//! These change gray levels only; pixel positions and image geometry stay
//! the same and nothing is allocated, so none of them can fail.
//!
//! # Operations
//!
//! - [`negative`] - Photographic negative: `max_gray - level`
//! - [`threshold`] - Binarize: below `thr` becomes black, the rest white
//! - [`brighten`] - Scale levels by a factor, saturating at `max_gray`
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::point::{brighten, threshold};
//!
//! let mut img = GrayImage::from_raw(3, 1, 255, vec![10, 100, 200]).unwrap();
//! brighten(&mut img, 1.5);
//! assert_eq!(img.as_bytes(), &[15, 150, 255]);
//!
//! threshold(&mut img, 150);
//! assert_eq!(img.as_bytes(), &[0, 255, 255]);
//! ```

use crate::round_to_u8;
use gray8_core::GrayImage;
use tracing::trace;

/// Transforms the image into its negative.
///
/// Dark pixels become light and vice versa: `new = max_gray - old`.
pub fn negative(img: &mut GrayImage) {
    trace!(width = img.width(), height = img.height(), "point::negative");
    let max = img.max_gray();
    img.map_pixels(|level| max.wrapping_sub(level));
}

/// Applies a threshold.
///
/// Pixels with `level < thr` become black (0); all others become white
/// (`max_gray`). A threshold of 0 therefore turns every pixel white.
pub fn threshold(img: &mut GrayImage, thr: u8) {
    trace!(thr, "point::threshold");
    let max = img.max_gray();
    img.map_pixels(|level| if level < thr { 0 } else { max });
}

/// Multiplies every level by `factor`, rounding half up and saturating at
/// `max_gray`.
///
/// Factors above 1.0 brighten the image, below 1.0 darken it.
///
/// # Panics
///
/// Panics if `factor` is negative or NaN.
pub fn brighten(img: &mut GrayImage, factor: f64) {
    assert!(factor >= 0.0, "brighten factor must be >= 0, got {factor}");
    trace!(factor, "point::brighten");
    let max = img.max_gray();
    img.map_pixels(|level| round_to_u8(level as f64 * factor).min(max));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32, max: u8, data: &[u8]) -> GrayImage {
        GrayImage::from_raw(width, height, max, data.to_vec()).unwrap()
    }

    #[test]
    fn test_negative() {
        let mut img = image(2, 2, 200, &[0, 50, 150, 200]);
        negative(&mut img);
        assert_eq!(img.as_bytes(), &[200, 150, 50, 0]);
    }

    #[test]
    fn test_negative_twice_is_identity() {
        let data: Vec<u8> = (0..60).map(|v| (v * 4) as u8).collect();
        let original = image(10, 6, 255, &data);
        let mut img = original.duplicate().unwrap();
        negative(&mut img);
        assert_ne!(img, original);
        negative(&mut img);
        assert_eq!(img, original);
    }

    #[test]
    fn test_threshold_zero_image() {
        let mut img = GrayImage::new(3, 3, 255).unwrap();
        threshold(&mut img, 1);
        assert!(img.as_bytes().iter().all(|&p| p == 0));

        let mut img = GrayImage::new(3, 3, 255).unwrap();
        threshold(&mut img, 0);
        assert!(img.as_bytes().iter().all(|&p| p == 255));
    }

    #[test]
    fn test_threshold_uses_max_gray() {
        let mut img = image(4, 1, 100, &[9, 10, 11, 100]);
        threshold(&mut img, 10);
        assert_eq!(img.as_bytes(), &[0, 100, 100, 100]);
    }

    #[test]
    fn test_brighten_rounds_half_up() {
        // 3 * 0.5 = 1.5 -> 2, 5 * 0.5 = 2.5 -> 3
        let mut img = image(3, 1, 255, &[3, 5, 7]);
        brighten(&mut img, 0.5);
        assert_eq!(img.as_bytes(), &[2, 3, 4]);
    }

    #[test]
    fn test_brighten_saturates_at_max_gray() {
        let mut img = image(3, 1, 120, &[10, 60, 100]);
        brighten(&mut img, 2.0);
        assert_eq!(img.as_bytes(), &[20, 120, 120]);

        brighten(&mut img, 1e12);
        assert_eq!(img.as_bytes(), &[120, 120, 120]);
    }

    #[test]
    fn test_brighten_zero_blackens() {
        let mut img = image(2, 1, 255, &[1, 255]);
        brighten(&mut img, 0.0);
        assert_eq!(img.as_bytes(), &[0, 0]);
    }

    #[test]
    #[should_panic(expected = "brighten factor")]
    fn test_brighten_negative_factor_panics() {
        let mut img = GrayImage::new(1, 1, 255).unwrap();
        brighten(&mut img, -0.1);
    }
}
