// SPDX-License-Identifier: MPL-2.0
//! Construction of the normalized arrow-arc outlines.
//!
//! Every outline lives in a square of side [`NORMALIZED_SIDE`] centered on the
//! origin. Four concentric rings are cut from that square:
//!
//! ```text
//! square ── barb ──> outer ── thickness/2 ──> mid ── thickness/2 ──> inner ── barb ──> inner arrow
//! ```
//!
//! The arrow head spans from the inner-arrow ring to the square edge on the
//! +x axis, with its tip on the mid ring. The body runs counter-clockwise
//! between the outer and inner rings.

use super::params::ShapeParameters;
use crate::config::NORMALIZED_SIDE;
use crate::error::{Error, Parameter, Result};
use crate::geometry::{self, BezPath, Point, Rect};

/// Outlines of every arrow plus the angle at which the first arc begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowRing {
    outlines: Vec<BezPath>,
    start_angle_degrees: f64,
}

impl ArrowRing {
    /// One outline per arrow; index `k` is the first rotated by `k × 360 / n`.
    #[must_use]
    pub fn outlines(&self) -> &[BezPath] {
        &self.outlines
    }

    /// Angle of the arrow tip, used to anchor the conical gradient.
    #[must_use]
    pub fn start_angle_degrees(&self) -> f64 {
        self.start_angle_degrees
    }
}

/// Builds [`ArrowRing`]s in a normalized square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPathBuilder {
    side: f64,
}

impl ArcPathBuilder {
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// The normalized square outlines are built in.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        geometry::centered_square(self.side)
    }

    /// Builds the base outline and its `arrow_count − 1` rotated copies.
    ///
    /// Fails with [`Error::InvalidParameters`] before any path is produced
    /// when a ring would collapse, the arrow head angle reaches 90°, the head
    /// would be longer than the arrow, or the outline would wrap onto itself.
    pub fn build(&self, params: &ShapeParameters) -> Result<ArrowRing> {
        params.validate()?;

        let square = self.bounds();
        let sweep = params.sweep_degrees();
        let thickness = self.side * params.thickness_ratio();
        let barb_extension = self.side * params.arrow_width_ratio();

        if thickness <= 0.0 {
            return Err(Error::invalid(
                Parameter::ThicknessRatio,
                params.thickness_ratio(),
                "ring thickness must be positive",
            ));
        }

        let outer_ring = geometry::shrink(square, barb_extension);
        if geometry::is_degenerate(outer_ring) {
            return Err(Error::invalid(
                Parameter::ArrowWidthRatio,
                params.arrow_width_ratio(),
                "barb margin consumes the whole square",
            ));
        }
        let mid_ring = geometry::shrink(outer_ring, thickness / 2.0);
        let inner_ring = geometry::shrink(outer_ring, thickness);
        if geometry::is_degenerate(inner_ring) {
            return Err(Error::invalid(
                Parameter::ThicknessRatio,
                params.thickness_ratio(),
                "inner ring collapses",
            ));
        }
        let inner_arrow = geometry::shrink(inner_ring, barb_extension);
        if geometry::is_degenerate(inner_arrow) {
            return Err(Error::invalid(
                Parameter::ArrowWidthRatio,
                params.arrow_width_ratio(),
                "arrow head reaches past the ring center",
            ));
        }

        if params.arrow_length_ratio() >= 1.0 {
            return Err(Error::invalid(
                Parameter::ArrowLengthRatio,
                params.arrow_length_ratio(),
                "arrow head must be shorter than the arrow",
            ));
        }
        let tip_degrees = sweep * params.arrow_length_ratio();
        if tip_degrees >= 90.0 {
            return Err(Error::invalid(
                Parameter::ArrowLengthRatio,
                params.arrow_length_ratio(),
                "arrow head angle must stay below 90 degrees",
            ));
        }

        let tip = Point::new(mid_ring.x1, mid_ring.x1 * tip_degrees.to_radians().tan());
        let start_angle_degrees = geometry::screen_angle_degrees(tip);
        // Positive: the head is shorter than the arrow and its angle below 90°.
        let adjusted_sweep = sweep + start_angle_degrees;
        let indent_arc = sweep * params.barb_indent_ratio();

        if indent_arc + adjusted_sweep >= 360.0 {
            return Err(Error::invalid(
                Parameter::BarbIndentRatio,
                params.barb_indent_ratio(),
                "outline would wrap onto itself",
            ));
        }

        let center = square.center();
        let mut base = BezPath::new();
        base.move_to((inner_arrow.x1, 0.0));
        base.line_to(tip);
        base.line_to((square.x1, 0.0));
        geometry::arc_to(
            &mut base,
            &geometry::screen_arc(
                center,
                outer_ring.width() / 2.0,
                -indent_arc,
                indent_arc + adjusted_sweep,
            ),
        );
        geometry::arc_to(
            &mut base,
            &geometry::screen_arc(
                center,
                inner_ring.width() / 2.0,
                adjusted_sweep,
                -(adjusted_sweep + indent_arc),
            ),
        );
        base.close_path();

        let count = params.arrow_count();
        let slot = params.slot_degrees();
        let mut outlines = Vec::with_capacity(count as usize);
        for k in 1..count {
            outlines.push(geometry::rotation(f64::from(k) * slot) * base.clone());
        }
        outlines.insert(0, base);

        tracing::debug!(
            arrow_count = count,
            sweep_degrees = sweep,
            start_angle_degrees,
            "rebuilt arrow outlines"
        );

        Ok(ArrowRing {
            outlines,
            start_angle_degrees,
        })
    }
}

impl Default for ArcPathBuilder {
    fn default() -> Self {
        Self::new(NORMALIZED_SIDE)
    }
}
