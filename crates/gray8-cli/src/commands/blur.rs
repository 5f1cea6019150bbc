//! Blur command
//!
//! Mean blur over a `(2*dx+1) x (2*dy+1)` window clipped to the image.

use crate::BlurArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use gray8_ops::filter::{blur, blur_naive};

pub fn run(args: BlurArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), dx = args.dx, dy = args.dy, naive = args.naive, "blur::run");

    let mut image = super::load_image(&args.input)?;
    info!(dx = args.dx, dy = args.dy, w = image.width(), h = image.height(), "Applying blur");

    if verbose > 0 {
        println!(
            "Applying {} blur (dx={}, dy={}) to {}",
            if args.naive { "naive" } else { "mean" },
            args.dx,
            args.dy,
            args.input.display()
        );
    }

    if args.naive {
        blur_naive(&mut image, args.dx, args.dy)?;
    } else {
        blur(&mut image, args.dx, args.dy)?;
    }

    super::save_image(&args.output, &image)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
