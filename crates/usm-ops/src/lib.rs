//! # usm-ops
//!
//! Image operations for unsharp-mask sharpening.
//!
//! This crate provides the processing stages the sharpening pipeline is
//! composed of, each usable on its own:
//!
//! - [`kernel`] - Normalized Gaussian weight matrices
//! - [`filter`] - 2D convolution with replicate-border sampling
//! - [`combine`] - Clamped per-pixel subtract and add
//! - [`sharpen`] - The staged blur -> subtract -> add pipeline
//!
//! # Example
//!
//! ```rust
//! use usm_core::{Image, Rgb};
//! use usm_ops::sharpen::unsharp_mask;
//!
//! let src = Image::filled(16, 16, Rgb::gray(128));
//! let out = unsharp_mask(&src, 2).unwrap();
//! assert_eq!(out.dimensions(), src.dimensions());
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel convolution via rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod combine;
pub mod filter;
pub mod kernel;
pub mod sharpen;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use kernel::Kernel;
