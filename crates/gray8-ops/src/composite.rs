//! Two-image compositing.
//!
//! Both operations mutate the destination in place from a read-only source
//! placed with its top-left corner at `(x, y)`. The source must fit entirely
//! inside the destination; this is asserted.
//!
//! # Operations
//!
//! - [`paste`] - Overwrite a region with the source
//! - [`blend`] - Alpha-blend the source into a region
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_ops::composite::{blend, paste};
//!
//! let mut canvas = GrayImage::new(4, 4, 255).unwrap();
//! let patch = GrayImage::from_raw(2, 1, 255, vec![100, 200]).unwrap();
//!
//! paste(&mut canvas, 1, 2, &patch);
//! assert_eq!(canvas.get(2, 2), 200);
//!
//! blend(&mut canvas, 1, 2, &GrayImage::new(2, 1, 255).unwrap(), 0.5);
//! assert_eq!(canvas.get(1, 2), 50);
//! ```

use crate::round_to_u8;
use gray8_core::GrayImage;
#[allow(unused_imports)]
use tracing::{debug, trace};

fn assert_fits(dst: &GrayImage, x: u32, y: u32, src: &GrayImage, op: &str) {
    assert!(
        dst.is_valid_rect(x, y, src.width(), src.height()),
        "{}: source {}x{} at ({},{}) does not fit in {}x{}",
        op,
        src.width(),
        src.height(),
        x,
        y,
        dst.width(),
        dst.height()
    );
}

/// Pastes `src` into `dst` at `(x, y)`, overwriting the covered pixels.
///
/// # Panics
///
/// Panics if `src` does not fit inside `dst` at `(x, y)`.
pub fn paste(dst: &mut GrayImage, x: u32, y: u32, src: &GrayImage) {
    assert_fits(dst, x, y, src, "paste");
    trace!(x, y, w = src.width(), h = src.height(), "composite::paste");

    for (i, j) in src.bounds().positions() {
        dst.set(x + i, y + j, src.get(i, j));
    }
}

/// Blends `src` into `dst` at `(x, y)`.
///
/// Each covered pixel becomes `(1 - alpha) * dst + alpha * src`, rounded
/// half up. `alpha` is normally in `[0, 1]`; values outside that interval
/// extrapolate and the result saturates to `[0, 255]` at the store.
///
/// # Panics
///
/// Panics if `src` does not fit inside `dst` at `(x, y)`.
pub fn blend(dst: &mut GrayImage, x: u32, y: u32, src: &GrayImage, alpha: f64) {
    assert_fits(dst, x, y, src, "blend");
    debug!(x, y, alpha, "composite::blend");

    for (i, j) in src.bounds().positions() {
        let under = dst.get(x + i, y + j) as f64;
        let over = src.get(i, j) as f64;
        dst.set(x + i, y + j, round_to_u8((1.0 - alpha) * under + alpha * over));
    }
}
