//! Parallel image processing using Rayon.
//!
//! Provides a row-parallel convolution for large images. Each output row is
//! computed independently on the rayon pool; the per-pixel accumulation is
//! shared with the sequential driver, so results are bit-identical to
//! [`filter::convolve`](crate::filter::convolve).
//!
//! # Example
//!
//! ```rust
//! use usm_core::{Image, Rgb};
//! use usm_ops::{parallel, Kernel};
//!
//! let src = Image::filled(64, 64, Rgb::gray(90));
//! let kernel = Kernel::gaussian(2).unwrap();
//! let blurred = parallel::convolve(&src, &kernel);
//! assert_eq!(blurred, src);
//! ```

use crate::filter::convolve_at;
use crate::Kernel;
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::trace;
use usm_core::pixel::CHANNELS;
use usm_core::Image;

/// Convolves the source image with the kernel, distributing rows over the
/// rayon pool.
pub fn convolve(src: &Image, kernel: &Kernel) -> Image {
    trace!(
        width = src.width(),
        height = src.height(),
        kernel_size = kernel.size(),
        "parallel convolve"
    );

    let (width, height) = src.dimensions();
    let row_len = width as usize * CHANNELS;
    let mut dst = Image::new(width, height);

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let px = convolve_at(src, kernel, x, y as u32);
                let i = x as usize * CHANNELS;
                row[i] = px.r;
                row[i + 1] = px.g;
                row[i + 2] = px.b;
            }
        });

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use usm_core::Rgb;

    #[test]
    fn matches_sequential_convolve() {
        let mut src = Image::new(17, 11);
        for y in 0..11 {
            for x in 0..17 {
                src.set_pixel(
                    x,
                    y,
                    Rgb::new(
                        (x * 13 + y * 7) as u8,
                        (x * 29) as u8,
                        (255 - x * 3 - y * 11) as u8,
                    ),
                );
            }
        }

        for radius in [0, 1, 3] {
            let kernel = Kernel::gaussian(radius).unwrap();
            let seq = filter::convolve(&src, &kernel);
            let par = convolve(&src, &kernel);
            assert_eq!(par, seq);
        }
    }

    #[test]
    fn single_row_image() {
        let mut src = Image::new(6, 1);
        src.set_pixel(0, 0, Rgb::WHITE);
        let kernel = Kernel::gaussian(1).unwrap();
        assert_eq!(convolve(&src, &kernel), filter::convolve(&src, &kernel));
    }
}
