//! JPEG format support.
//!
//! Reads baseline JPEG files into RGB buffers via `jpeg-decoder` and writes
//! RGB buffers via `jpeg-encoder` at quality 90. Grayscale input is
//! replicated to RGB; CMYK and 16-bit inputs are rejected.
//!
//! JPEG is lossy: a decode of a freshly written file preserves dimensions but
//! not exact pixel values.
//!
//! # Example
//!
//! ```rust,ignore
//! use usm_io::jpeg;
//!
//! let image = jpeg::read("photo.jpg")?;
//! jpeg::write("output.jpg", &image)?;
//! ```

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};
use usm_core::Image;

/// Default encoding quality (1-100).
const QUALITY: u8 = 90;

/// Reads a JPEG file from the given path.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for corrupted files and
/// [`IoError::UnsupportedBitDepth`] for CMYK or 16-bit grayscale input.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));

    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);
    trace!(width, height, pixel_format = ?info.pixel_format, "jpeg read");

    let rgb = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => {
            // Replicate gray to RGB
            pixels.iter().flat_map(|&g| [g, g, g]).collect()
        }
        format => {
            return Err(IoError::UnsupportedBitDepth(format!("{:?}", format)));
        }
    };

    Image::from_data(width, height, rgb)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image to an 8-bit RGB JPEG file at quality 90.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if encoding fails and [`IoError::Io`]
/// if the file cannot be created.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let width = u16::try_from(image.width())
        .map_err(|_| IoError::EncodeError("image too wide for JPEG".into()))?;
    let height = u16::try_from(image.height())
        .map_err(|_| IoError::EncodeError("image too tall for JPEG".into()))?;

    let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), QUALITY)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    encoder
        .encode(image.data(), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
