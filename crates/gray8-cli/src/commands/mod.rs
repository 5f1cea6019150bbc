//! CLI command implementations

pub mod blur;
pub mod composite;
pub mod crop;
pub mod info;
pub mod locate;
pub mod paste;
pub mod point;
pub mod transform;

use anyhow::{Context, Result};
use gray8_core::GrayImage;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<GrayImage> {
    gray8_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &GrayImage) -> Result<()> {
    gray8_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Checks that `inner` placed at `(x, y)` lies inside `outer`.
///
/// The library asserts this; the CLI reports it as an error instead.
pub fn ensure_fits(outer: &GrayImage, x: u32, y: u32, w: u32, h: u32, what: &str) -> Result<()> {
    anyhow::ensure!(
        outer.is_valid_rect(x, y, w, h),
        "{} {}x{} at ({},{}) does not fit in {}x{} image",
        what,
        w,
        h,
        x,
        y,
        outer.width(),
        outer.height()
    );
    Ok(())
}
