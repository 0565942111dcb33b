//! Sharpen command

use crate::SharpenArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use usm_ops::sharpen::unsharp_mask;

pub fn run(args: SharpenArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), radius = args.radius, "sharpen::run");

    let image = super::load_image(&args.input)?;

    info!(
        radius = args.radius,
        w = image.width(),
        h = image.height(),
        "Applying unsharp mask"
    );

    if verbose {
        println!(
            "Sharpening {} (radius={})",
            args.input.display(),
            args.radius
        );
    }

    let output = unsharp_mask(&image, args.radius)?;

    super::save_image(&args.output, &output)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
