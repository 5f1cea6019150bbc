//! Geometric transformation operations.
//!
//! Each transform reads the source through [`GrayImage::get`] and writes a
//! freshly allocated image through [`GrayImage::set`]; the input is never
//! modified. The only runtime failure is allocation of the new image.
//!
//! # Operations
//!
//! - [`rotate_ccw90`] - 90-degree counter-clockwise rotation
//! - [`mirror_h`] - Horizontal (left-right) mirror
//! - [`crop`] - Extract a rectangular region
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::transform::{crop, mirror_h, rotate_ccw90};
//!
//! // 3x2 image:
//! //   1 2 3
//! //   4 5 6
//! let src = GrayImage::from_raw(3, 2, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
//!
//! let rotated = rotate_ccw90(&src).unwrap();
//! assert_eq!(rotated.dimensions(), (2, 3));
//! assert_eq!(rotated.as_bytes(), &[3, 6, 2, 5, 1, 4]);
//!
//! let mirrored = mirror_h(&src).unwrap();
//! assert_eq!(mirrored.as_bytes(), &[3, 2, 1, 6, 5, 4]);
//!
//! let cropped = crop(&src, 1, 0, 2, 2).unwrap();
//! assert_eq!(cropped.as_bytes(), &[2, 3, 5, 6]);
//! ```

use gray8_core::{GrayImage, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Rotates the image 90 degrees counter-clockwise.
///
/// The result is `height` wide and `width` tall. Source pixel `(i, j)` lands
/// at `(j, width - 1 - i)`.
///
/// # Errors
///
/// Returns an allocation error if the new image cannot be created.
pub fn rotate_ccw90(img: &GrayImage) -> Result<GrayImage> {
    trace!(width = img.width(), height = img.height(), "transform::rotate_ccw90");
    let mut out = GrayImage::new(img.height(), img.width(), img.max_gray())?;
    let last_row = out.height().saturating_sub(1);

    for (i, j) in img.bounds().positions() {
        out.set(j, last_row - i, img.get(i, j));
    }

    Ok(out)
}

/// Mirrors the image left to right.
///
/// Destination `(x, y)` takes source `(width - 1 - x, y)`.
///
/// # Errors
///
/// Returns an allocation error if the new image cannot be created.
pub fn mirror_h(img: &GrayImage) -> Result<GrayImage> {
    trace!(width = img.width(), height = img.height(), "transform::mirror_h");
    let mut out = GrayImage::new(img.width(), img.height(), img.max_gray())?;
    let last_col = img.width().saturating_sub(1);

    for (x, y) in out.bounds().positions() {
        out.set(x, y, img.get(last_col - x, y));
    }

    Ok(out)
}

/// Crops the rectangle `(x, y, w, h)` into a new `w`x`h` image.
///
/// Destination `(i, j)` takes source `(x + i, y + j)`.
///
/// # Panics
///
/// Panics if the rectangle does not lie entirely inside `img`.
///
/// # Errors
///
/// Returns an allocation error if the new image cannot be created.
pub fn crop(img: &GrayImage, x: u32, y: u32, w: u32, h: u32) -> Result<GrayImage> {
    assert!(
        img.is_valid_rect(x, y, w, h),
        "crop region {}x{} at ({},{}) exceeds {}x{}",
        w,
        h,
        x,
        y,
        img.width(),
        img.height()
    );
    debug!(x, y, w, h, "transform::crop");
    let mut out = GrayImage::new(w, h, img.max_gray())?;

    for (i, j) in out.bounds().positions() {
        out.set(i, j, img.get(x + i, y + j));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Non-square image with unique levels so axis swaps show up.
    fn ramp(width: u32, height: u32) -> GrayImage {
        let data = (0..width * height).map(|i| i as u8).collect();
        GrayImage::from_raw(width, height, 255, data).unwrap()
    }

    #[test]
    fn test_rotate_mapping() {
        let src = ramp(4, 3);
        let dst = rotate_ccw90(&src).unwrap();
        assert_eq!(dst.dimensions(), (3, 4));
        assert_eq!(dst.max_gray(), 255);
        for (i, j) in src.bounds().positions() {
            assert_eq!(dst.get(j, 3 - i), src.get(i, j));
        }
        // top-right corner of the source becomes the top-left corner
        assert_eq!(dst.get(0, 0), src.get(3, 0));
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let src = ramp(5, 2);
        let mut img = rotate_ccw90(&src).unwrap();
        for _ in 0..3 {
            img = rotate_ccw90(&img).unwrap();
        }
        assert_eq!(img, src);
    }

    #[test]
    fn test_rotate_empty() {
        let src = GrayImage::new(0, 3, 9).unwrap();
        let dst = rotate_ccw90(&src).unwrap();
        assert_eq!(dst.dimensions(), (3, 0));
        assert_eq!(dst.max_gray(), 9);
    }

    #[test]
    fn test_mirror() {
        let src = ramp(3, 2);
        let dst = mirror_h(&src).unwrap();
        assert_eq!(dst.as_bytes(), &[2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let src = ramp(7, 3);
        let twice = mirror_h(&mirror_h(&src).unwrap()).unwrap();
        assert_eq!(twice, src);
    }

    #[test]
    fn test_crop() {
        let src = ramp(6, 5);
        let dst = crop(&src, 2, 1, 3, 2).unwrap();
        assert_eq!(dst.dimensions(), (3, 2));
        assert_eq!(dst.as_bytes(), &[8, 9, 10, 14, 15, 16]);
    }

    #[test]
    fn test_crop_full_and_empty() {
        let src = ramp(4, 4);
        assert_eq!(crop(&src, 0, 0, 4, 4).unwrap(), src);
        let empty = crop(&src, 4, 4, 0, 0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_crop_out_of_bounds_panics() {
        let src = ramp(4, 4);
        let _ = crop(&src, 3, 3, 2, 2);
    }

    #[test]
    fn test_source_untouched() {
        let src = ramp(4, 3);
        let before = src.duplicate().unwrap();
        let _ = rotate_ccw90(&src).unwrap();
        let _ = mirror_h(&src).unwrap();
        let _ = crop(&src, 1, 1, 2, 2).unwrap();
        assert_eq!(src, before);
    }
}
