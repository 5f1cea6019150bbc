//! Point commands: negative, threshold, brighten

use crate::{BrightenArgs, PointArgs, ThresholdArgs};
use anyhow::{ensure, Result};
use gray8_ops::point::{brighten, negative, threshold};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run_negative(args: PointArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "negative::run");
    let mut image = super::load_image(&args.input)?;
    negative(&mut image);
    super::save_image(&args.output, &image)?;

    if verbose > 0 {
        println!("Wrote negative to {}", args.output.display());
    }
    Ok(())
}

pub fn run_threshold(args: ThresholdArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), threshold = args.threshold, "threshold::run");
    let mut image = super::load_image(&args.input)?;
    threshold(&mut image, args.threshold);
    super::save_image(&args.output, &image)?;

    if verbose > 0 {
        println!("Thresholded at {} -> {}", args.threshold, args.output.display());
    }
    Ok(())
}

pub fn run_brighten(args: BrightenArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), factor = args.factor, "brighten::run");
    ensure!(args.factor >= 0.0, "factor must be >= 0, got {}", args.factor);

    let mut image = super::load_image(&args.input)?;
    brighten(&mut image, args.factor);
    super::save_image(&args.output, &image)?;

    if verbose > 0 {
        println!("Brightened by {} -> {}", args.factor, args.output.display());
    }
    Ok(())
}
