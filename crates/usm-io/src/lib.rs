//! # usm-io
//!
//! Image I/O for unsharp-mask processing.
//!
//! Reads and writes the two container formats the tool supports, decoding
//! into a plain 8-bit RGB [`Image`]:
//!
//! - **PNG** - lossless, via the `png` crate
//! - **JPEG** - lossy, via `jpeg-decoder` / `jpeg-encoder`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use usm_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.jpg")?;
//!
//! // Write to a different format
//! write("output.png", &image)?;
//! ```
//!
//! # Format Detection
//!
//! [`read`] detects the format from magic bytes first and falls back to the
//! file extension; [`write`] picks the format from the extension. Anything
//! else fails with [`IoError::UnsupportedFormat`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

pub mod jpeg;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use std::path::Path;
use usm_core::Image;

/// Reads an image from a file, auto-detecting the format.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the file is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = Format::detect(path)?;

    match format {
        Format::Png => png::read(path),
        Format::Jpeg => jpeg::read(path),
        Format::Unknown => Err(unsupported(path)),
    }
}

/// Writes an image to a file, detecting format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the extension names no
/// supported format.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        Format::Png => png::write(path, image),
        Format::Jpeg => jpeg::write(path, image),
        Format::Unknown => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use usm_core::Rgb;

    #[test]
    fn dispatch_roundtrip_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.png");

        let mut image = Image::new(8, 8);
        image.set_pixel(3, 4, Rgb::new(200, 100, 50));

        write(&path, &image).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn unsupported_extension_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.bmp");
        let image = Image::new(2, 2);

        assert!(matches!(
            write(&path, &image).unwrap_err(),
            IoError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn read_detects_png_despite_jpg_extension() {
        let dir = tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        let lying_path = dir.path().join("lying.jpg");

        let image = Image::filled(4, 4, Rgb::gray(7));
        write(&png_path, &image).unwrap();
        std::fs::copy(&png_path, &lying_path).unwrap();

        let loaded = read(&lying_path).unwrap();
        assert_eq!(loaded, image);
    }
}
