//! Image info command.
//!
//! Prints dimensions, max gray and the min/max levels of each input.

use crate::InfoArgs;
use anyhow::Result;
use std::fs;

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for (idx, path) in args.input.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let image = super::load_image(path)?;

        println!("{}", path.display());
        println!("  Size:      {}x{}", image.width(), image.height());
        println!("  Max gray:  {}", image.max_gray());
        if image.is_empty() {
            println!("  Levels:    (empty)");
        } else {
            let (min, max) = image.stats();
            println!("  Levels:    {min}..{max}");
        }
        if verbose > 0 {
            let file_size = fs::metadata(path)?.len();
            println!("  File size: {file_size} B");
        }
    }
    Ok(())
}
