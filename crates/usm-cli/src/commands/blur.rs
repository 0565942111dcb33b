//! Blur command
//!
//! Applies a Gaussian blur without the sharpening passes. Useful for
//! inspecting the mask the sharpen command builds internally.

use crate::BlurArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use usm_ops::Kernel;

pub fn run(args: BlurArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), radius = args.radius, "blur::run");

    let image = super::load_image(&args.input)?;

    info!(
        radius = args.radius,
        w = image.width(),
        h = image.height(),
        "Applying gaussian blur"
    );

    if verbose {
        println!(
            "Blurring {} (radius={})",
            args.input.display(),
            args.radius
        );
    }

    let kernel = Kernel::gaussian(args.radius)?;

    #[cfg(feature = "parallel")]
    let blurred = usm_ops::parallel::convolve(&image, &kernel);
    #[cfg(not(feature = "parallel"))]
    let blurred = usm_ops::filter::convolve(&image, &kernel);

    super::save_image(&args.output, &blurred)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
