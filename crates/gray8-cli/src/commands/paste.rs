//! Paste command - copy one image into another at an offset.

use crate::PasteArgs;
use anyhow::Result;
use gray8_ops::composite::paste;

pub fn run(args: PasteArgs, verbose: u8) -> Result<()> {
    let mut bg = super::load_image(&args.background)?;
    let fg = super::load_image(&args.foreground)?;
    super::ensure_fits(&bg, args.x, args.y, fg.width(), fg.height(), "pasted image")?;

    if verbose > 0 {
        println!(
            "Pasting {} ({}x{}) onto {} at ({}, {})",
            args.foreground.display(),
            fg.width(),
            fg.height(),
            args.background.display(),
            args.x,
            args.y
        );
    }

    paste(&mut bg, args.x, args.y, &fg);
    super::save_image(&args.output, &bg)?;

    if verbose > 0 {
        println!("Saved to {}", args.output.display());
    }

    Ok(())
}
