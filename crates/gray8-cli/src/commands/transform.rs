//! Rotate and mirror commands

use crate::PointArgs;
use anyhow::Result;
use gray8_ops::transform::{mirror_h, rotate_ccw90};

pub fn run_rotate(args: PointArgs, verbose: u8) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let rotated = rotate_ccw90(&image)?;

    if verbose > 0 {
        println!(
            "Rotated {}x{} -> {}x{}",
            image.width(),
            image.height(),
            rotated.width(),
            rotated.height()
        );
    }

    super::save_image(&args.output, &rotated)
}

pub fn run_mirror(args: PointArgs, verbose: u8) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let mirrored = mirror_h(&image)?;
    super::save_image(&args.output, &mirrored)?;

    if verbose > 0 {
        println!("Mirrored -> {}", args.output.display());
    }
    Ok(())
}
