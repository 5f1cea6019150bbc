//! Crop command

use crate::CropArgs;
use anyhow::Result;
use gray8_ops::transform::crop;

pub fn run(args: CropArgs, verbose: u8) -> Result<()> {
    let image = super::load_image(&args.input)?;
    super::ensure_fits(&image, args.x, args.y, args.w, args.h, "crop region")?;

    if verbose > 0 {
        println!(
            "Cropping {}x{} @ ({},{}) from {}x{}",
            args.w,
            args.h,
            args.x,
            args.y,
            image.width(),
            image.height()
        );
    }

    let cropped = crop(&image, args.x, args.y, args.w, args.h)?;
    super::save_image(&args.output, &cropped)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
