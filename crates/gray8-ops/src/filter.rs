//! Mean (box) blur with a clipped window.
//!
//! Each output pixel `(x, y)` is the mean of the source pixels in
//! `[x - dx, x + dx] x [y - dy, y + dy]` that lie inside the image, rounded
//! half up. Out-of-range offsets are skipped, not padded, mirrored or
//! wrapped, and the divisor is the number of samples actually summed. Border
//! pixels are therefore averaged over fewer samples than interior ones.
//!
//! Outputs are always computed from the pre-blur pixels. [`blur_into`] is the
//! core: it reads an immutable source and writes a distinct destination, so
//! an output can never feed into a later output. [`blur`] takes a snapshot of
//! the image and blurs back into it.
//!
//! # Implementations
//!
//! - [`blur`] / [`blur_into`] / [`blurred`] - Flat-buffer implementation: per
//!   output row, column sums over the clipped row band, then a horizontal
//!   window slid one column at a time. Rows run on rayon with the `parallel`
//!   feature.
//! - [`blur_naive`] - Reference implementation reading every in-bounds
//!   window sample through [`GrayImage::get`]. Counted by the pixel access
//!   instrumentation; quadratic in the clipped window size.
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::filter::blur;
//!
//! let mut img = GrayImage::from_raw(3, 1, 255, vec![0, 90, 0]).unwrap();
//! blur(&mut img, 1, 0).unwrap();
//! // borders average 2 samples, the center 3
//! assert_eq!(img.as_bytes(), &[45, 30, 45]);
//! ```

use gray8_core::{Error, GrayImage, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Blurs the image in place with a `(2dx+1) x (2dy+1)` clipped mean window.
///
/// `dx = dy = 0` leaves the image unchanged.
///
/// # Errors
///
/// Returns an allocation error if the snapshot or scratch row cannot be
/// allocated; the image is left untouched in that case.
pub fn blur(img: &mut GrayImage, dx: u32, dy: u32) -> Result<()> {
    debug!(width = img.width(), height = img.height(), dx, dy, "filter::blur");
    if dx == 0 && dy == 0 {
        return Ok(());
    }
    let snapshot = img.duplicate()?;
    blur_into(&snapshot, img, dx, dy)
}

/// Returns a blurred copy of `img`.
///
/// # Errors
///
/// Returns an allocation error if the output image cannot be allocated.
pub fn blurred(img: &GrayImage, dx: u32, dy: u32) -> Result<GrayImage> {
    let mut out = GrayImage::new(img.width(), img.height(), img.max_gray())?;
    blur_into(img, &mut out, dx, dy)?;
    Ok(out)
}

/// Blurs `src` into `dst`.
///
/// Only pixel values are written; `dst` keeps its own `max_gray`.
///
/// # Panics
///
/// Panics if `src` and `dst` have different dimensions.
///
/// # Errors
///
/// Returns an allocation error if a scratch row cannot be allocated.
pub fn blur_into(src: &GrayImage, dst: &mut GrayImage, dx: u32, dy: u32) -> Result<()> {
    assert_eq!(
        src.dimensions(),
        dst.dimensions(),
        "blur source and destination sizes differ"
    );
    trace!(dx, dy, "filter::blur_into");
    if src.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "parallel")]
    {
        crate::parallel::blur_rows(src, dst, dx, dy)
    }
    #[cfg(not(feature = "parallel"))]
    {
        blur_rows(src, dst, dx, dy)
    }
}

/// Single-threaded row loop.
#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn blur_rows(src: &GrayImage, dst: &mut GrayImage, dx: u32, dy: u32) -> Result<()> {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let pixels = src.as_bytes();
    let mut col_sums = scratch_row(width)?;

    for (y, out) in dst.as_bytes_mut().chunks_exact_mut(width).enumerate() {
        blur_row(pixels, width, height, y, dx as usize, dy as usize, &mut col_sums, out);
    }
    Ok(())
}

/// Allocates the per-row column-sum scratch buffer.
pub(crate) fn scratch_row(width: usize) -> Result<Vec<u64>> {
    let mut row = Vec::new();
    row.try_reserve_exact(width).map_err(|e| {
        Error::allocation_failed(width * std::mem::size_of::<u64>(), e.to_string())
    })?;
    row.resize(width, 0);
    Ok(row)
}

/// Computes output row `y` from the raster `src`.
///
/// `src` must hold `width * height` pixels with `width, height > 0`;
/// `col_sums` and `out` must hold `width` entries.
#[allow(clippy::too_many_arguments)]
pub(crate) fn blur_row(
    src: &[u8],
    width: usize,
    height: usize,
    y: usize,
    dx: usize,
    dy: usize,
    col_sums: &mut [u64],
    out: &mut [u8],
) {
    let top = y.saturating_sub(dy);
    let bottom = y.saturating_add(dy).min(height - 1);
    let rows = (bottom - top + 1) as u64;

    col_sums.fill(0);
    for row in src[top * width..(bottom + 1) * width].chunks_exact(width) {
        for (sum, &level) in col_sums.iter_mut().zip(row) {
            *sum += level as u64;
        }
    }

    // Window covers columns left..=right, clipped to the image.
    let mut left = 0;
    let mut right = dx.min(width - 1);
    let mut sum: u64 = col_sums[..=right].iter().sum();

    for x in 0..width {
        let cols = (right - left + 1) as u64;
        out[x] = mean_round(sum, cols * rows);

        let next = x + 1;
        if next == width {
            break;
        }
        let next_right = next.saturating_add(dx).min(width - 1);
        if next_right > right {
            right = next_right;
            sum += col_sums[right];
        }
        let next_left = next.saturating_sub(dx);
        if next_left > left {
            sum -= col_sums[left];
            left = next_left;
        }
    }
}

/// `sum / count` rounded half up, in integer arithmetic.
#[inline]
fn mean_round(sum: u64, count: u64) -> u8 {
    ((2 * sum + count) / (2 * count)) as u8
}

/// Reference blur reading each window sample through [`GrayImage::get`].
///
/// Produces exactly the same output as [`blur`]. The snapshot is a
/// duplicate image; results are written with [`GrayImage::set`].
///
/// # Errors
///
/// Returns an allocation error if the snapshot cannot be allocated.
pub fn blur_naive(img: &mut GrayImage, dx: u32, dy: u32) -> Result<()> {
    debug!(width = img.width(), height = img.height(), dx, dy, "filter::blur_naive");
    let snapshot = img.duplicate()?;
    let last_col = snapshot.width().saturating_sub(1);
    let last_row = snapshot.height().saturating_sub(1);

    for (i, j) in snapshot.bounds().positions() {
        let mut sum = 0u64;
        let mut count = 0u64;
        // window clipped to the image
        for k in j.saturating_sub(dy)..=j.saturating_add(dy).min(last_row) {
            for t in i.saturating_sub(dx)..=i.saturating_add(dx).min(last_col) {
                sum += u64::from(snapshot.get(t, k));
                count += 1;
            }
        }
        img.set(i, j, mean_round(sum, count));
    }
    Ok(())
}
