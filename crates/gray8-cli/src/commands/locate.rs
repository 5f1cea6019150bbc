//! Locate command - exact sub-image search.

use crate::LocateArgs;
use anyhow::Result;
use gray8_ops::search::locate;

pub fn run(args: LocateArgs, verbose: u8) -> Result<()> {
    let image = super::load_image(&args.image)?;
    let pattern = super::load_image(&args.pattern)?;

    if verbose > 0 {
        println!(
            "Searching {}x{} for {}x{}",
            image.width(),
            image.height(),
            pattern.width(),
            pattern.height()
        );
    }

    match locate(&image, &pattern) {
        Some((x, y)) => println!("found at ({x}, {y})"),
        None => println!("not found"),
    }
    Ok(())
}
