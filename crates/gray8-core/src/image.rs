//! The 8-bit grayscale image buffer.
//!
//! [`GrayImage`] owns a dense byte buffer of `width * height` gray levels
//! plus the maximum gray level (`max_gray`) that renders as pure white.
//!
//! # Memory Layout
//!
//! Pixels are stored in **raster order**: row-major, top row first, left to
//! right within a row. Pixel `(x, y)` lives at flat offset `y * width + x`:
//!
//! ```text
//! width = 100
//! (33, 0) -> data[33]
//! (22, 1) -> data[122]
//! ```
//!
//! Every operation in the workspace goes through this mapping.
//!
//! # Contracts
//!
//! Geometric preconditions are caller obligations. [`get`](GrayImage::get),
//! [`set`](GrayImage::set) and [`stats`](GrayImage::stats) assert them and
//! panic when violated; out-of-range coordinates are never clamped or
//! wrapped. Only allocation can fail at runtime, reported as
//! [`Error::AllocationFailed`].
//!
//! # Ownership
//!
//! A `GrayImage` is move-only: it does not implement `Clone`. A deep copy is
//! an explicit, fallible [`duplicate`](GrayImage::duplicate). Memory is
//! released exactly once when the owner drops it.
//!
//! # Usage
//!
//! ```rust
//! use gray8_core::GrayImage;
//!
//! let mut img = GrayImage::new(100, 50, 255)?;
//! img.set(33, 10, 200);
//! assert_eq!(img.get(33, 10), 200);
//! assert_eq!(img.as_bytes()[10 * 100 + 33], 200);
//! # Ok::<(), gray8_core::Error>(())
//! ```

use crate::{instrument, Error, Rect, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Maximum gray level a pixel can store.
pub const PIX_MAX: u8 = 255;

/// Owned 8-bit grayscale image.
///
/// # Invariants
///
/// - `data.len() == width * height`
/// - `0 < max_gray <= 255`
/// - pixel values lie in `[0, max_gray]` (documented, not enforced by
///   [`set`](Self::set))
#[derive(Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    max_gray: u8,
    data: Vec<u8>,
}

impl GrayImage {
    /// Creates a new black image (every pixel at level 0).
    ///
    /// # Panics
    ///
    /// Panics if `max_gray == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the pixel buffer cannot be
    /// allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray8_core::GrayImage;
    ///
    /// let img = GrayImage::new(3, 2, 255).unwrap();
    /// assert_eq!(img.dimensions(), (3, 2));
    /// assert!(img.as_bytes().iter().all(|&p| p == 0));
    /// ```
    pub fn new(width: u32, height: u32, max_gray: u8) -> Result<Self> {
        assert!(max_gray > 0, "max_gray must be in 1..=255");
        trace!(width, height, max_gray, "GrayImage::new");

        let len = buffer_len(width, height)?;
        let data = alloc_zeroed(len)?;
        Ok(Self {
            width,
            height,
            max_gray,
            data,
        })
    }

    /// Creates an image from raster-order pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `max_gray == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, max_gray: u8, data: Vec<u8>) -> Result<Self> {
        assert!(max_gray > 0, "max_gray must be in 1..=255");
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            max_gray,
            data,
        })
    }

    /// Returns a deep copy of this image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the copy cannot be allocated.
    pub fn duplicate(&self) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|e| Error::allocation_failed(self.data.len(), e.to_string()))?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            width: self.width,
            height: self.height,
            max_gray: self.max_gray,
            data,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the gray level that renders as pure white.
    #[inline]
    pub fn max_gray(&self) -> u8 {
        self.max_gray
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn is_valid_position(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns `true` if the rectangle `(x, y, w, h)` lies entirely inside
    /// the image.
    ///
    /// ```rust
    /// use gray8_core::GrayImage;
    ///
    /// let img = GrayImage::new(10, 8, 255).unwrap();
    /// assert!(img.is_valid_rect(2, 3, 8, 5));
    /// assert!(!img.is_valid_rect(2, 3, 9, 5));
    /// ```
    #[inline]
    pub fn is_valid_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        self.bounds().contains_rect(&Rect::new(x, y, w, h))
    }

    /// Linear index of pixel (x, y).
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            self.is_valid_position(x, y),
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Returns the gray level at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        let idx = self.index(x, y);
        instrument::count_pixel_access(1);
        self.data[idx]
    }

    /// Stores `level` at (x, y). No clamping to `max_gray` happens here.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, level: u8) {
        let idx = self.index(x, y);
        instrument::count_pixel_access(1);
        self.data[idx] = level;
    }

    /// Finds the minimum and maximum gray levels.
    ///
    /// The scan stops early once `min == 0` and `max == max_gray`, since no
    /// further extremum is possible.
    ///
    /// # Panics
    ///
    /// Panics on an empty image.
    ///
    /// ```rust
    /// use gray8_core::GrayImage;
    ///
    /// let img = GrayImage::from_raw(3, 1, 200, vec![40, 7, 90]).unwrap();
    /// assert_eq!(img.stats(), (7, 90));
    /// ```
    pub fn stats(&self) -> (u8, u8) {
        assert!(!self.data.is_empty(), "stats of an empty image");
        let mut min = self.data[0];
        let mut max = self.data[0];
        for &level in &self.data {
            if level < min {
                min = level;
            } else if level > max {
                max = level;
            }
            if min == 0 && max == self.max_gray {
                break;
            }
        }
        (min, max)
    }

    /// Raw pixel data in raster order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel data in raster order.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns its pixel data.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {} out of bounds for height {}", y, self.height);
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Replaces every pixel with `f(pixel)`, in raster order.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(u8) -> u8,
    {
        for level in &mut self.data {
            *level = f(*level);
        }
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::allocation_failed(usize::MAX, format!("{width}x{height} overflows usize")))
}

fn alloc_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|e| {
        debug!(len, error = %e, "pixel buffer allocation failed");
        Error::allocation_failed(len, e.to_string())
    })?;
    data.resize(len, 0);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> GrayImage {
        let data = (0..width * height).map(|i| (i % 251) as u8).collect();
        GrayImage::from_raw(width, height, 255, data).unwrap()
    }

    #[test]
    fn test_new_is_black() {
        let img = GrayImage::new(7, 5, 100).unwrap();
        assert_eq!(img.dimensions(), (7, 5));
        assert_eq!(img.max_gray(), 100);
        assert_eq!(img.pixel_count(), 35);
        assert!(img.as_bytes().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_zero_sized() {
        let img = GrayImage::new(0, 10, 255).unwrap();
        assert!(img.is_empty());
        assert!(!img.is_valid_position(0, 0));
        assert!(img.is_valid_rect(0, 0, 0, 10));
    }

    #[test]
    #[should_panic(expected = "max_gray")]
    fn test_zero_max_gray_panics() {
        let _ = GrayImage::new(1, 1, 0);
    }

    #[test]
    fn test_index_mapping_non_square() {
        // 4 wide, 3 tall: (x, y) must land at y * 4 + x, not x * 3 + y
        let mut img = GrayImage::new(4, 3, 255).unwrap();
        img.set(3, 1, 9);
        img.set(1, 2, 17);
        assert_eq!(img.as_bytes()[7], 9);
        assert_eq!(img.as_bytes()[9], 17);
        assert_eq!(img.get(3, 1), 9);
        assert_eq!(img.get(1, 2), 17);
        assert_eq!(img.row(2), &[0, 17, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let img = GrayImage::new(4, 3, 255).unwrap();
        img.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_swapped_axes_panics() {
        let mut img = GrayImage::new(4, 3, 255).unwrap();
        img.set(0, 3, 1);
    }

    #[test]
    fn test_valid_rect() {
        let img = GrayImage::new(10, 8, 255).unwrap();
        assert!(img.is_valid_rect(0, 0, 10, 8));
        assert!(img.is_valid_rect(10, 8, 0, 0));
        assert!(!img.is_valid_rect(1, 0, 10, 8));
        assert!(!img.is_valid_rect(0, 0, 8, 10));
        assert!(!img.is_valid_rect(u32::MAX, 0, 2, 1));
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let err = GrayImage::from_raw(4, 3, 255, vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 4, height: 3, .. }));
    }

    #[test]
    fn test_duplicate_is_deep() {
        let src = ramp(5, 4);
        let mut copy = src.duplicate().unwrap();
        assert_eq!(copy, src);
        copy.set(0, 0, 250);
        assert_ne!(copy.get(0, 0), src.get(0, 0));
    }

    #[test]
    fn test_stats() {
        let img = GrayImage::from_raw(2, 2, 255, vec![30, 200, 12, 90]).unwrap();
        assert_eq!(img.stats(), (12, 200));
    }

    #[test]
    fn test_stats_early_exit_keeps_extremes() {
        let img = GrayImage::from_raw(4, 1, 9, vec![0, 9, 3, 5]).unwrap();
        assert_eq!(img.stats(), (0, 9));
    }

    #[test]
    #[should_panic(expected = "empty image")]
    fn test_stats_empty_panics() {
        let img = GrayImage::new(0, 0, 255).unwrap();
        img.stats();
    }

    #[test]
    fn test_map_pixels() {
        let mut img = ramp(3, 2);
        img.map_pixels(|p| p + 1);
        assert_eq!(img.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[cfg(feature = "instrument")]
    #[test]
    fn test_get_set_are_counted() {
        let mut img = GrayImage::new(2, 2, 255).unwrap();
        let (_, counters, _) = instrument::measure(|| {
            img.set(1, 1, 3);
            img.get(1, 1)
        });
        assert_eq!(counters.pixmem, 2);
    }
}
