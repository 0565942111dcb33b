//! Unsharp-mask sharpening pipeline.
//!
//! Sharpening is the composition of three stages, run in order with no
//! branching:
//!
//! 1. `blurred = convolve(source, gaussian(radius))`
//! 2. `difference = subtract(source, blurred)`
//! 3. `output = add(source, difference)`
//!
//! The staged form is normative. Algebraically the result approximates
//! `clamp(2 * source - blurred)`, but the clamping at each stage makes the
//! composition differ from the fused formula, so the stages are never merged
//! or reordered. At most three images are alive at any stage boundary.

use crate::{combine, filter, Kernel, OpsResult};
#[allow(unused_imports)]
use tracing::{debug, trace};
use usm_core::Image;

/// Sharpens the source image with an unsharp mask of the given blur radius.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`](crate::OpsError::InvalidParameter)
/// for a negative radius, before any processing happens.
///
/// # Example
///
/// ```rust
/// use usm_core::{Image, Rgb};
/// use usm_ops::sharpen::unsharp_mask;
///
/// // A uniform image has no local contrast to boost: the pipeline is a no-op.
/// let src = Image::filled(4, 4, Rgb::gray(128));
/// assert_eq!(unsharp_mask(&src, 1).unwrap(), src);
/// ```
pub fn unsharp_mask(src: &Image, radius: i32) -> OpsResult<Image> {
    let kernel = Kernel::gaussian(radius)?;
    debug!(
        width = src.width(),
        height = src.height(),
        radius,
        "unsharp mask"
    );

    let blurred = filter::convolve(src, &kernel);
    let difference = combine::subtract(src, &blurred)?;
    combine::add(src, &difference)
}
