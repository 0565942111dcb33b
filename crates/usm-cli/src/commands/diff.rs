//! Diff command
//!
//! Reports how much two images disagree and optionally writes the clamped
//! difference `a - b` (negative results floor at zero, matching the
//! sharpening pipeline's subtract stage).

use crate::DiffArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{info, trace};
use usm_ops::combine;

pub fn run(args: DiffArgs, verbose: bool) -> Result<()> {
    trace!(a = %args.a.display(), b = %args.b.display(), "diff::run");

    let a = super::load_image(&args.a)?;
    let b = super::load_image(&args.b)?;

    // Both directions for reporting; the clamped a - b alone would hide
    // pixels where b is brighter.
    let forward = combine::subtract(&a, &b)?;
    let backward = combine::subtract(&b, &a)?;

    let max_diff = forward
        .data()
        .iter()
        .chain(backward.data())
        .copied()
        .max()
        .unwrap_or(0);
    let differing = forward
        .data()
        .chunks(3)
        .zip(backward.data().chunks(3))
        .filter(|(f, r)| f.iter().chain(r.iter()).any(|&v| v != 0))
        .count();

    println!(
        "{} vs {}: max channel diff {}, {} of {} pixels differ",
        args.a.display(),
        args.b.display(),
        max_diff,
        differing,
        forward.pixel_count()
    );

    if let Some(output) = &args.output {
        super::save_image(output, &forward)?;
        if verbose {
            println!("Wrote difference image to {}", output.display());
        }
    }

    Ok(())
}
