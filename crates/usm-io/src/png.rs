//! PNG format support.
//!
//! Reads 8-bit PNG files into RGB buffers and writes RGB buffers back out.
//! Alpha channels are stripped and grayscale is replicated to RGB at the
//! decode boundary; the processing pipeline only ever sees plain 8-bit RGB.
//!
//! # Example
//!
//! ```rust,ignore
//! use usm_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};
use usm_core::Image;

/// Reads a PNG file from the given path.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for corrupted files and
/// [`IoError::UnsupportedBitDepth`] for 16-bit or palette images.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    trace!(width, height, color_type = ?info.color_type, "png read");

    let rgb = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf[..info.buffer_size()].to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            // Strip alpha
            buf[..info.buffer_size()]
                .chunks(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            // Replicate gray to RGB
            buf[..info.buffer_size()]
                .iter()
                .flat_map(|&g| [g, g, g])
                .collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => buf[..info.buffer_size()]
            .chunks(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Image::from_data(width, height, rgb)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image to an 8-bit RGB PNG file.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder rejects the data and
/// [`IoError::Io`] if the file cannot be created.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use usm_core::Rgb;

    fn test_image(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(x, y, Rgb::new((x * 8) as u8, (y * 8) as u8, 128));
            }
        }
        img
    }

    #[test]
    fn roundtrip_rgb_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        let image = test_image(32, 32);
        write(&path, &image).expect("failed to write PNG");
        let loaded = read(&path).expect("failed to read PNG");

        assert_eq!(loaded, image);
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.png");
        assert!(matches!(read(&path).unwrap_err(), IoError::Io(_)));
    }

    #[test]
    fn read_garbage_fails_with_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        assert!(matches!(read(&path).unwrap_err(), IoError::DecodeError(_)));
    }
}
