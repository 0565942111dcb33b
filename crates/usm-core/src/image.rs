//! Owned image buffer for 8-bit RGB processing.
//!
//! # Memory Layout
//!
//! Images store pixels in **row-major** order, top-to-bottom, with channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use usm_core::{Image, Rgb};
//!
//! let mut img = Image::new(640, 480);
//! img.set_pixel(100, 100, Rgb::new(255, 128, 64));
//!
//! let px = img.pixel(100, 100);
//! assert_eq!(px.r, 255);
//! ```
//!
//! # Edge Sampling
//!
//! [`Image::pixel_clamped`] accepts signed coordinates and snaps them to the
//! nearest valid pixel (replicate border). Filters sample through it so that
//! the edge policy lives in one place.

use crate::pixel::CHANNELS;
use crate::{Error, Result, Rgb};

/// Owned 8-bit RGB image buffer.
///
/// The buffer length is always exactly `width * height * 3`; the constructors
/// enforce this, so every `Image` in circulation is internally consistent.
///
/// # Example
///
/// ```rust
/// use usm_core::{Image, Rgb};
///
/// let img = Image::filled(4, 4, Rgb::gray(128));
/// assert_eq!(img.dimensions(), (4, 4));
/// assert_eq!(img.pixel(3, 3), Rgb::gray(128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Interleaved RGB pixel data, row-major.
    data: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl Image {
    /// Creates a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * CHANNELS;
        Self {
            data: vec![0u8; size],
            width,
            height,
        }
    }

    /// Creates an image from existing interleaved RGB data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not exactly
    /// `width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Image;
    ///
    /// let img = Image::from_data(2, 2, vec![0u8; 12]).unwrap();
    /// assert_eq!(img.pixel_count(), 4);
    ///
    /// assert!(Image::from_data(2, 2, vec![0u8; 7]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a single pixel value.
    pub fn filled(width: u32, height: u32, px: Rgb) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * CHANNELS);
        for _ in 0..pixel_count {
            data.extend_from_slice(&[px.r, px.g, px.b]);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true when both images have identical width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Borrows the interleaved RGB data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrows the interleaved RGB data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image. Use
    /// [`pixel_clamped`](Self::pixel_clamped) for border-tolerant sampling.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
    }

    /// Samples the pixel at signed coordinates with replicate-border policy.
    ///
    /// Out-of-bounds coordinates are snapped to the nearest edge pixel, never
    /// wrapped or zero-filled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::{Image, Rgb};
    ///
    /// let mut img = Image::new(2, 2);
    /// img.set_pixel(0, 0, Rgb::new(9, 9, 9));
    ///
    /// assert_eq!(img.pixel_clamped(-5, -5), Rgb::new(9, 9, 9));
    /// assert_eq!(img.pixel_clamped(0, 0), img.pixel_clamped(-1, 0));
    /// ```
    #[inline]
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Rgb {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        let i = self.offset(cx, cy);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
