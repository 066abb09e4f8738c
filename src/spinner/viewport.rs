// SPDX-License-Identifier: MPL-2.0
//! Mapping from the normalized square onto the output rectangle.

use crate::error::{Error, Parameter, Result};
use crate::geometry::{Affine, Rect};

/// Scale + translate from normalized space onto an output rectangle whose
/// top-left corner is the origin.
///
/// X and Y are scaled independently: a non-square output stretches the
/// spinner instead of letterboxing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    width: f64,
    height: f64,
    transform: Affine,
}

impl ViewportTransform {
    /// Builds the transform for `bounds` (normalized) onto `width × height`.
    ///
    /// Zero sizes are accepted and collapse the drawing; negative or
    /// non-finite sizes are rejected.
    pub fn build(bounds: Rect, width: f64, height: f64) -> Result<Self> {
        for (field, value) in [
            (Parameter::OutputWidth, width),
            (Parameter::OutputHeight, height),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(Error::invalid(field, value, "must not be negative"));
            }
        }

        let transform = Affine::translate((-bounds.x0, -bounds.y0))
            .then_scale_non_uniform(width / bounds.width(), height / bounds.height());

        Ok(Self {
            width,
            height,
            transform,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{self, Point};
    use crate::test_utils::assert_abs_diff_eq;

    fn bounds() -> Rect {
        geometry::centered_square(1000.0)
    }

    #[test]
    fn maps_normalized_corners_onto_output_corners() {
        let viewport = ViewportTransform::build(bounds(), 400.0, 200.0).expect("valid size");
        let t = viewport.transform();

        let top_left = t * Point::new(-500.0, -500.0);
        assert_abs_diff_eq!(top_left.x, 0.0);
        assert_abs_diff_eq!(top_left.y, 0.0);

        let bottom_right = t * Point::new(500.0, 500.0);
        assert_abs_diff_eq!(bottom_right.x, 400.0);
        assert_abs_diff_eq!(bottom_right.y, 200.0);

        let center = t * Point::ORIGIN;
        assert_abs_diff_eq!(center.x, 200.0);
        assert_abs_diff_eq!(center.y, 100.0);
    }

    #[test]
    fn rebuilding_with_same_size_is_bit_identical() {
        let a = ViewportTransform::build(bounds(), 317.0, 211.0).expect("valid size");
        let b = ViewportTransform::build(bounds(), 317.0, 211.0).expect("valid size");
        assert_eq!(a, b);
        let (a, b) = (a.transform().as_coeffs(), b.transform().as_coeffs());
        assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn zero_size_is_accepted() {
        let viewport = ViewportTransform::build(bounds(), 0.0, 0.0).expect("zero is valid");
        assert_eq!(viewport.transform().determinant(), 0.0);
    }

    #[test]
    fn negative_or_nan_sizes_are_rejected() {
        let err = ViewportTransform::build(bounds(), -1.0, 10.0).unwrap_err();
        assert_eq!(err.field(), Some(Parameter::OutputWidth));

        let err = ViewportTransform::build(bounds(), 10.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some(Parameter::OutputHeight));
    }
}
