//! Exact sub-image search.
//!
//! [`locate`] tries every top-left offset of a pattern inside a larger image
//! in raster order and returns the first offset where every pixel is equal.
//! The cost is `O(W * H * w * h)` in the worst case, but each candidate stops
//! at its first mismatching pixel, so typical images are far cheaper.
//!
//! The [`instrument`](gray8_core::instrument) comparison counter records
//! every pixel comparison, and [`locate`] adds one more per candidate
//! offset it tries.
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::search::{locate, matches_at};
//! use gray8_ops::transform::crop;
//!
//! let data = (0..64).map(|v| v as u8).collect();
//! let img = GrayImage::from_raw(8, 8, 255, data).unwrap();
//! let pattern = crop(&img, 3, 4, 2, 2).unwrap();
//!
//! assert!(matches_at(&img, 3, 4, &pattern));
//! assert_eq!(locate(&img, &pattern), Some((3, 4)));
//! ```

use gray8_core::{instrument, GrayImage};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Returns `true` if `pattern` matches `img` with its top-left corner at
/// `(x, y)`.
///
/// Pixels are compared in raster order and the scan stops at the first
/// mismatch. A pattern that would overhang the right or bottom edge of `img`
/// at this offset does not match; no pixel is compared in that case.
///
/// # Panics
///
/// Panics if `(x, y)` is not a valid position of `img`.
pub fn matches_at(img: &GrayImage, x: u32, y: u32, pattern: &GrayImage) -> bool {
    assert!(
        img.is_valid_position(x, y),
        "match offset ({}, {}) out of bounds for image {}x{}",
        x,
        y,
        img.width(),
        img.height()
    );
    compare_at(img, x, y, pattern)
}

fn compare_at(img: &GrayImage, x: u32, y: u32, pattern: &GrayImage) -> bool {
    if !img.is_valid_rect(x, y, pattern.width(), pattern.height()) {
        return false;
    }
    for (i, j) in pattern.bounds().positions() {
        instrument::count_comparison(1);
        if img.get(x + i, y + j) != pattern.get(i, j) {
            return false;
        }
    }
    true
}

/// Searches for `pattern` inside `img`.
///
/// Offsets are tried row by row (smallest `y` first, then smallest `x`), so
/// the first match in raster order is returned. Returns `None` if there is
/// no match or if `pattern` is larger than `img` in either dimension. An
/// empty pattern matches at `(0, 0)`.
///
/// Each offset tried counts one comparison, on top of the per-pixel
/// comparisons made while matching at that offset.
pub fn locate(img: &GrayImage, pattern: &GrayImage) -> Option<(u32, u32)> {
    trace!(
        width = img.width(),
        height = img.height(),
        pattern_w = pattern.width(),
        pattern_h = pattern.height(),
        "search::locate"
    );
    let max_x = img.width().checked_sub(pattern.width())?;
    let max_y = img.height().checked_sub(pattern.height())?;

    for y in 0..=max_y {
        for x in 0..=max_x {
            instrument::count_comparison(1);
            if compare_at(img, x, y, pattern) {
                debug!(x, y, "sub-image found");
                return Some((x, y));
            }
        }
    }
    None
}
