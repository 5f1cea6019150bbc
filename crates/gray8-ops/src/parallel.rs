//! Row-parallel blur using Rayon.
//!
//! Output rows are independent: each one reads a band of the immutable
//! source and writes only its own slice of the destination. Rows are split
//! with `par_chunks_mut` and each worker keeps one column-sum scratch row.
//!
//! Thread count follows the global Rayon pool (`RAYON_NUM_THREADS` or the
//! CLI `--threads` flag).

use crate::filter::{blur_row, scratch_row};
use gray8_core::{Error, GrayImage, Result};
use rayon::prelude::*;

/// Blurs every row of `src` into `dst` in parallel.
///
/// Both images must be non-empty and of equal size.
pub(crate) fn blur_rows(src: &GrayImage, dst: &mut GrayImage, dx: u32, dy: u32) -> Result<()> {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let pixels = src.as_bytes();

    dst.as_bytes_mut()
        .par_chunks_mut(width)
        .enumerate()
        .try_for_each_init(
            || scratch_row(width),
            |scratch, (y, out)| {
                let col_sums = scratch.as_mut().map_err(|e| {
                    Error::allocation_failed(width * std::mem::size_of::<u64>(), e.to_string())
                })?;
                blur_row(pixels, width, height, y, dx as usize, dy as usize, col_sums, out);
                Ok(())
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;

    fn gradient(width: u32, height: u32) -> GrayImage {
        let data = (0..width * height)
            .map(|i| ((i % width) * 13 + (i / width) * 29) as u8)
            .collect();
        GrayImage::from_raw(width, height, 255, data).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let src = gradient(37, 23);
        for &(dx, dy) in &[(0, 0), (1, 1), (5, 2), (0, 7), (40, 40)] {
            let mut seq = GrayImage::new(37, 23, 255).unwrap();
            let mut par = GrayImage::new(37, 23, 255).unwrap();
            filter::blur_rows(&src, &mut seq, dx, dy).unwrap();
            blur_rows(&src, &mut par, dx, dy).unwrap();
            assert_eq!(seq, par, "dx={dx} dy={dy}");
        }
    }

    #[test]
    fn test_single_column() {
        let src = GrayImage::from_raw(1, 4, 255, vec![0, 40, 80, 120]).unwrap();
        let mut dst = GrayImage::new(1, 4, 255).unwrap();
        blur_rows(&src, &mut dst, 3, 1).unwrap();
        // 40/2, 120/3, 240/3, 200/2
        assert_eq!(dst.as_bytes(), &[20, 40, 80, 100]);
    }
}
