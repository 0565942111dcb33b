//! Clamped per-pixel combine operations.
//!
//! Both operations require identical dimensions and allocate a new result
//! image; the inputs are never mutated.
//!
//! # Example
//!
//! ```rust
//! use usm_core::{Image, Rgb};
//! use usm_ops::combine::{add, subtract};
//!
//! let a = Image::filled(2, 2, Rgb::gray(100));
//! let b = Image::filled(2, 2, Rgb::gray(30));
//!
//! let diff = subtract(&a, &b).unwrap();
//! assert_eq!(diff.pixel(0, 0), Rgb::gray(70));
//!
//! let sum = add(&a, &diff).unwrap();
//! assert_eq!(sum.pixel(0, 0), Rgb::gray(170));
//! ```

use crate::{OpsError, OpsResult};
#[allow(unused_imports)]
use tracing::trace;
use usm_core::Image;

/// Subtracts `b` from `a`, per pixel, per channel, flooring at 0.
///
/// This is NOT a signed difference: negative results clamp to 0 rather than
/// being offset or wrapped. The sharpening pipeline relies on exactly this
/// behavior.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the images differ in dimensions.
pub fn subtract(a: &Image, b: &Image) -> OpsResult<Image> {
    ensure_same_dimensions(a, b, "subtract")?;
    trace!(width = a.width(), height = a.height(), "subtract");

    let data: Vec<u8> = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&av, &bv)| av.saturating_sub(bv))
        .collect();

    Ok(Image::from_data(a.width(), a.height(), data)?)
}

/// Adds `b` to `a`, per pixel, per channel, ceiling at 255.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the images differ in dimensions.
pub fn add(a: &Image, b: &Image) -> OpsResult<Image> {
    ensure_same_dimensions(a, b, "add")?;
    trace!(width = a.width(), height = a.height(), "add");

    let data: Vec<u8> = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&av, &bv)| av.saturating_add(bv))
        .collect();

    Ok(Image::from_data(a.width(), a.height(), data)?)
}

fn ensure_same_dimensions(a: &Image, b: &Image, op: &str) -> OpsResult<()> {
    if !a.same_dimensions(b) {
        return Err(OpsError::SizeMismatch(format!(
            "{op} requires equal dimensions, got {}x{} and {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use usm_core::Rgb;

    #[test]
    fn subtract_self_is_zero() {
        let mut a = Image::new(3, 3);
        a.set_pixel(1, 1, Rgb::new(200, 100, 50));
        a.set_pixel(2, 0, Rgb::WHITE);

        let out = subtract(&a, &a).unwrap();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn subtract_floors_at_zero() {
        let a = Image::filled(2, 2, Rgb::gray(10));
        let b = Image::filled(2, 2, Rgb::gray(200));

        let out = subtract(&a, &b).unwrap();
        assert_eq!(out.pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn add_zero_is_identity() {
        let mut a = Image::new(2, 3);
        a.set_pixel(0, 2, Rgb::new(1, 2, 3));
        let zero = Image::new(2, 3);

        let out = add(&a, &zero).unwrap();
        assert_eq!(out, a);
    }

    #[test]
    fn add_ceils_at_255() {
        let a = Image::filled(2, 2, Rgb::gray(200));
        let b = Image::filled(2, 2, Rgb::gray(100));

        let out = add(&a, &b).unwrap();
        assert_eq!(out.pixel(1, 1), Rgb::WHITE);
    }

    #[test]
    fn mismatched_dimensions_rejected() {
        let a = Image::new(2, 2);
        let b = Image::new(3, 2);

        assert!(matches!(
            subtract(&a, &b).unwrap_err(),
            OpsError::SizeMismatch(_)
        ));
        assert!(matches!(add(&a, &b).unwrap_err(), OpsError::SizeMismatch(_)));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = Image::filled(2, 2, Rgb::gray(9));
        let b = Image::filled(2, 2, Rgb::gray(4));
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = subtract(&a, &b).unwrap();
        let _ = add(&a, &b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
