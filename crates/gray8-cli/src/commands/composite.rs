//! Blend command

use crate::BlendArgs;
use anyhow::Result;
use gray8_ops::composite::blend;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlendArgs, verbose: u8) -> Result<()> {
    trace!(alpha = args.alpha, x = args.x, y = args.y, "blend::run");
    let mut bg = super::load_image(&args.background)?;
    let fg = super::load_image(&args.foreground)?;
    super::ensure_fits(&bg, args.x, args.y, fg.width(), fg.height(), "blended image")?;

    if !(0.0..=1.0).contains(&args.alpha) {
        info!(alpha = args.alpha, "alpha outside [0, 1], result will saturate");
    }

    blend(&mut bg, args.x, args.y, &fg, args.alpha);
    super::save_image(&args.output, &bg)?;

    if verbose > 0 {
        println!("Blended with alpha {} -> {}", args.alpha, args.output.display());
    }
    Ok(())
}
