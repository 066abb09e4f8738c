// SPDX-License-Identifier: MPL-2.0
//! Conical gradient layout and sampling.
//!
//! Positions run counter-clockwise from the start angle, `0.0` to `1.0` for a
//! full turn. Each arrow gets three stops: a leading color at the arrow tip,
//! a middle color halfway along the sweep and a transparent stop at the tail.
//! A final stop at `1.0` repeats the leading color so the turn closes cleanly.

use crate::color::{self, Color};
use crate::config::{
    DISABLED_DARK_GRAY, DISABLED_LIGHT_GRAY, LEADING_HUE_DEGREES, MID_HUE_DEGREES,
    TRAILING_HUE_DEGREES,
};
use crate::geometry::{self, Point};
use palette::{FromColor, LinSrgba, Mix, Srgba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// Conical gradient centered on the normalized origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    start_angle_degrees: f64,
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    #[must_use]
    pub fn start_angle_degrees(&self) -> f64 {
        self.start_angle_degrees
    }

    /// Stops in non-decreasing position order; the last one sits at `1.0`.
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at a gradient position; positions outside `[0, 1]` wrap.
    ///
    /// Neighboring stops are mixed in linear light.
    #[must_use]
    pub fn color_at(&self, position: f64) -> Color {
        let Some(first) = self.stops.first() else {
            return color::TRANSPARENT;
        };
        let position = if (0.0..=1.0).contains(&position) {
            position
        } else {
            position.rem_euclid(1.0)
        };
        if position <= first.position {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if position <= to.position {
                let span = to.position - from.position;
                if span <= 0.0 {
                    return to.color;
                }
                #[allow(clippy::cast_possible_truncation)]
                let t = ((position - from.position) / span) as f32;
                let from: LinSrgba = LinSrgba::from_color(from.color);
                let to: LinSrgba = LinSrgba::from_color(to.color);
                return Srgba::from_color(from.mix(to, t));
            }
        }

        self.stops.last().map_or(first.color, |stop| stop.color)
    }

    /// Color at a screen-counter-clockwise angle around the center.
    #[must_use]
    pub fn color_at_angle(&self, degrees: f64) -> Color {
        self.color_at(((degrees - self.start_angle_degrees) / 360.0).rem_euclid(1.0))
    }

    /// Color at a point in normalized space.
    #[must_use]
    pub fn color_at_point(&self, p: Point) -> Color {
        self.color_at_angle(geometry::screen_angle_degrees(p))
    }
}

/// Shape-dependent part of the gradient, rebuilt only with the outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBuilder {
    arrow_count: u32,
    sweep_degrees: f64,
    start_angle_degrees: f64,
}

impl GradientBuilder {
    #[must_use]
    pub fn new(arrow_count: u32, sweep_degrees: f64, start_angle_degrees: f64) -> Self {
        Self {
            arrow_count,
            sweep_degrees,
            start_angle_degrees,
        }
    }

    /// Lays out the stops for the current hue offset.
    ///
    /// Grayed-out gradients ignore the hue offset.
    #[must_use]
    pub fn build(&self, hue_offset_degrees: f64, grayed_out: bool) -> GradientSpec {
        let (leading, mid, trailing) = if grayed_out {
            (
                color::gray(DISABLED_LIGHT_GRAY),
                color::gray(DISABLED_DARK_GRAY),
                color::TRANSPARENT,
            )
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let hue = |base: f64| ((base + hue_offset_degrees) % 360.0) as f32;
            (
                color::from_hue(hue(LEADING_HUE_DEGREES), 1.0),
                color::from_hue(hue(MID_HUE_DEGREES), 1.0),
                color::from_hue(hue(TRAILING_HUE_DEGREES), 0.0),
            )
        };

        let count = f64::from(self.arrow_count);
        let sweep_share = self.sweep_degrees / 360.0;
        let mut stops = Vec::with_capacity(self.arrow_count as usize * 3 + 1);
        for arrow in 0..self.arrow_count {
            let base = f64::from(arrow) / count;
            stops.push(GradientStop {
                position: base,
                color: leading,
            });
            stops.push(GradientStop {
                position: base + 0.5 * sweep_share,
                color: mid,
            });
            stops.push(GradientStop {
                position: base + sweep_share,
                color: trailing,
            });
        }
        stops.push(GradientStop {
            position: 1.0,
            color: leading,
        });

        GradientSpec {
            start_angle_degrees: self.start_angle_degrees,
            stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn three_arrows() -> GradientBuilder {
        GradientBuilder::new(3, 96.0, -28.8)
    }

    #[test]
    fn emits_three_stops_per_arrow_plus_closing_stop() {
        let spec = three_arrows().build(0.0, false);
        assert_eq!(spec.stops().len(), 10);
        assert_eq!(spec.stops().last().map(|s| s.position), Some(1.0));
        assert_eq!(spec.start_angle_degrees(), -28.8);
    }

    #[test]
    fn positions_are_non_decreasing_for_any_layout() {
        for count in 1..=20 {
            for gap in [0.001, 0.2, 0.7, 0.999] {
                let sweep = (1.0 - gap) * 360.0 / f64::from(count);
                let spec = GradientBuilder::new(count, sweep, 0.0).build(42.0, false);
                let positions: Vec<f64> = spec.stops().iter().map(|s| s.position).collect();
                assert!(
                    positions.windows(2).all(|w| w[0] <= w[1]),
                    "count {count} gap {gap}: {positions:?}"
                );
                assert_eq!(positions.last().copied(), Some(1.0));
            }
        }
    }

    #[test]
    fn positions_match_arrow_slots() {
        let spec = three_arrows().build(0.0, false);
        let positions: Vec<f64> = spec.stops().iter().map(|s| s.position).collect();
        assert_abs_diff_eq!(positions[0], 0.0);
        assert_abs_diff_eq!(positions[1], 48.0 / 360.0);
        assert_abs_diff_eq!(positions[2], 96.0 / 360.0);
        assert_abs_diff_eq!(positions[3], 1.0 / 3.0);
    }

    #[test]
    fn colored_stops_follow_hue_offset() {
        let spec = three_arrows().build(0.0, false);
        assert_eq!(color::to_rgba8(spec.stops()[0].color), [0, 255, 255, 255]);
        assert_eq!(color::to_rgba8(spec.stops()[1].color), [0, 0, 255, 255]);
        assert_eq!(spec.stops()[2].color.alpha, 0.0);

        let shifted = three_arrows().build(60.0, false);
        // 180 + 60 = 240: the leading stop turns blue
        assert_eq!(color::to_rgba8(shifted.stops()[0].color), [0, 0, 255, 255]);
        assert_eq!(shifted.stops()[9].color, shifted.stops()[0].color);
    }

    #[test]
    fn grayed_out_ignores_hue_offset() {
        let a = three_arrows().build(0.0, true);
        let b = three_arrows().build(137.0, true);
        assert_eq!(a, b);
        assert_eq!(a.stops()[0].color, color::gray(DISABLED_LIGHT_GRAY));
        assert_eq!(a.stops()[1].color, color::gray(DISABLED_DARK_GRAY));
        assert_eq!(a.stops()[2].color, color::TRANSPARENT);
        assert_eq!(a.stops()[9].color, color::gray(DISABLED_LIGHT_GRAY));
    }

    #[test]
    fn color_at_interpolates_between_stops() {
        let spec = three_arrows().build(0.0, true);
        let quarter = 24.0 / 360.0;
        let c = spec.color_at(quarter);
        // Halfway in linear light sits above the sRGB midpoint of 0.7 and 0.3
        assert!(c.red > 0.5 && c.red < DISABLED_LIGHT_GRAY, "red {}", c.red);
        assert_abs_diff_eq!(c.alpha, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn color_at_wraps_positions() {
        let spec = three_arrows().build(0.0, true);
        assert_eq!(spec.color_at(1.25), spec.color_at(0.25));
        assert_eq!(spec.color_at(-0.75), spec.color_at(0.25));
    }

    #[test]
    fn color_at_angle_is_anchored_at_start_angle() {
        let spec = three_arrows().build(0.0, true);
        assert_eq!(spec.color_at_angle(-28.8), spec.color_at(0.0));
        // Halfway along the first arrow's sweep
        let mid = spec.color_at_angle(-28.8 + 48.0);
        assert_abs_diff_eq!(mid.red, DISABLED_DARK_GRAY, epsilon = 1e-4);
    }

    #[test]
    fn gap_between_arrows_is_transparent_then_leading() {
        let spec = three_arrows().build(0.0, true);
        // Between tail (96°) and next tip (120°): fades back in from transparent
        let c = spec.color_at(100.0 / 360.0);
        assert!(c.alpha < 1.0 && c.alpha > 0.0);
    }
}
