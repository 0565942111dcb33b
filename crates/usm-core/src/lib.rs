//! # usm-core
//!
//! Core types for unsharp-mask image processing.
//!
//! This crate provides the foundational types used throughout the USM-RS
//! workspace:
//!
//! - [`Image`] - Owned 8-bit RGB image buffer
//! - [`Rgb`] - Plain three-channel pixel value
//! - [`Error`] - Error type for buffer construction
//!
//! ## Design Philosophy
//!
//! There is exactly one pixel representation in this workspace: 8-bit RGB.
//! Every processing stage consumes borrowed input images and produces a new
//! owned [`Image`]; no stage mutates its input in place. That keeps the
//! pipeline contract explicit and makes per-pixel parallelism trivially safe.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of USM-RS and has no internal dependencies.
//! All other USM-RS crates depend on `usm-core`:
//!
//! ```text
//! usm-core (this crate)
//!    ^
//!    |
//!    +-- usm-ops (kernel, convolution, combine, sharpen)
//!    +-- usm-io (PNG/JPEG read/write)
//!    +-- usm-cli (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::Rgb;
