//! 2D convolution with replicate-border sampling.
//!
//! For every destination pixel the kernel is swept over the source with
//! out-of-bounds taps snapped to the nearest edge pixel (replicate border,
//! never wrapped or zero-padded). Channel sums accumulate in `f64`, then are
//! rounded to the nearest integer and clamped to `[0, 255]`.
//!
//! The border policy is part of the contract: downstream golden tests are
//! defined against this exact direct 2D form.
//!
//! # Example
//!
//! ```rust
//! use usm_core::{Image, Rgb};
//! use usm_ops::{filter::convolve, Kernel};
//!
//! let src = Image::filled(8, 8, Rgb::gray(200));
//! let kernel = Kernel::gaussian(1).unwrap();
//! let blurred = convolve(&src, &kernel);
//!
//! // A uniform image is invariant under any normalized blur.
//! assert_eq!(blurred, src);
//! ```

use crate::Kernel;
#[allow(unused_imports)]
use tracing::{debug, trace};
use usm_core::{Image, Rgb};

/// Convolves the source image with the kernel.
///
/// The output has identical dimensions to the input. Infallible: kernel
/// validity is established at construction and an [`Image`] cannot carry a
/// mismatched buffer.
pub fn convolve(src: &Image, kernel: &Kernel) -> Image {
    trace!(
        width = src.width(),
        height = src.height(),
        kernel_size = kernel.size(),
        "convolve"
    );

    let (width, height) = src.dimensions();
    let mut dst = Image::new(width, height);

    for y in 0..height {
        for x in 0..width {
            dst.set_pixel(x, y, convolve_at(src, kernel, x, y));
        }
    }

    dst
}

/// Computes one output pixel of the convolution.
///
/// Shared by the sequential and row-parallel drivers so both produce
/// bit-identical results.
#[inline]
pub(crate) fn convolve_at(src: &Image, kernel: &Kernel, x: u32, y: u32) -> Rgb {
    let r = kernel.radius();
    let size = kernel.size();

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;

    for ky in 0..size {
        for kx in 0..size {
            let sx = x as i64 + kx as i64 - r;
            let sy = y as i64 + ky as i64 - r;
            let px = src.pixel_clamped(sx, sy);
            let w = kernel.weight(kx, ky);
            sum_r += f64::from(px.r) * w;
            sum_g += f64::from(px.g) * w;
            sum_b += f64::from(px.b) * w;
        }
    }

    Rgb::new(round_channel(sum_r), round_channel(sum_g), round_channel(sum_b))
}

/// Rounds an accumulator to the nearest integer and clamps it to `[0, 255]`.
#[inline]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use usm_core::Rgb;

    fn gradient(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(
                    x,
                    y,
                    Rgb::new(
                        (x * 31 % 256) as u8,
                        (y * 57 % 256) as u8,
                        ((x + y) * 11 % 256) as u8,
                    ),
                );
            }
        }
        img
    }

    #[test]
    fn identity_kernel_is_bit_identical() {
        let src = gradient(9, 7);
        let out = convolve(&src, &Kernel::identity());
        assert_eq!(out, src);
    }

    #[test]
    fn zero_radius_gaussian_is_bit_identical() {
        let src = gradient(5, 5);
        let out = convolve(&src, &Kernel::gaussian(0).unwrap());
        assert_eq!(out, src);
    }

    #[test]
    fn preserves_dimensions() {
        let src = gradient(13, 4);
        for radius in 1..=3 {
            let out = convolve(&src, &Kernel::gaussian(radius).unwrap());
            assert_eq!(out.dimensions(), src.dimensions());
        }
    }

    #[test]
    fn uniform_image_is_invariant() {
        let src = Image::filled(4, 4, Rgb::gray(128));
        let out = convolve(&src, &Kernel::gaussian(1).unwrap());
        assert_eq!(out, src);
    }

    /// Edge replication golden values, hand-computed for a 2x2 image with a
    /// single red corner pixel and a radius-1 kernel.
    ///
    /// With sigma = 1/3 the unnormalized weights are e0 = 1,
    /// e1 = exp(-4.5) and e2 = exp(-9), total S = 1 + 4*e1 + 4*e2.
    /// Counting the clamped taps that land on (0, 0):
    ///
    /// - out(0,0): 1 + 2*e1 + e2 taps -> 255 * 0.97838 = 249.49 -> 249
    /// - out(1,0), out(0,1): e1 + e2 taps -> 255 * 0.010749 = 2.74 -> 3
    /// - out(1,1): e2 tap -> 255 * 0.000118 = 0.03 -> 0
    #[test]
    fn edge_replication_golden_values() {
        let mut src = Image::new(2, 2);
        src.set_pixel(0, 0, Rgb::new(255, 0, 0));

        let out = convolve(&src, &Kernel::gaussian(1).unwrap());

        assert_eq!(out.pixel(0, 0), Rgb::new(249, 0, 0));
        assert_eq!(out.pixel(1, 0), Rgb::new(3, 0, 0));
        assert_eq!(out.pixel(0, 1), Rgb::new(3, 0, 0));
        assert_eq!(out.pixel(1, 1), Rgb::new(0, 0, 0));
    }
}
