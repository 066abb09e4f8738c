// SPDX-License-Identifier: MPL-2.0
//! Planar geometry helpers on top of `kurbo`.
//!
//! All coordinates use a y-down surface convention. Angles taken and returned
//! by these helpers are counter-clockwise degrees as seen on screen, with 0°
//! pointing along +x, so a point at angle θ on a circle of radius r is
//! `(r·cos θ, −r·sin θ)`. `kurbo` measures radians turning clockwise on a
//! y-down surface; the helpers negate and convert.

use crate::config::ARC_TOLERANCE;
pub use kurbo::{Affine, Arc, BezPath, PathEl, Point, Rect, Vec2};

/// Point on a circle around `center` at a screen-counter-clockwise angle.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    center + Vec2::from_angle(-degrees.to_radians()) * radius
}

/// Screen-counter-clockwise angle of `p` around the origin, in degrees.
#[must_use]
pub fn screen_angle_degrees(p: Point) -> f64 {
    (-p.y).atan2(p.x).to_degrees()
}

/// Rotation about the origin; positive angles turn clockwise on screen.
#[must_use]
pub fn rotation(degrees: f64) -> Affine {
    Affine::rotate(degrees.to_radians())
}

/// Square of side `side` centered on the origin.
#[must_use]
pub fn centered_square(side: f64) -> Rect {
    Rect::from_center_size(Point::ORIGIN, (side, side))
}

/// Moves every edge of `rect` inwards by `margin`.
///
/// The result may be inverted; callers check [`is_degenerate`].
#[must_use]
pub fn shrink(rect: Rect, margin: f64) -> Rect {
    rect.inset(-margin)
}

/// True when either side is zero, negative or not a number.
#[must_use]
pub fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}

/// Circular arc with screen-counter-clockwise angles. A negative sweep runs
/// clockwise.
#[must_use]
pub fn screen_arc(center: Point, radius: f64, start_degrees: f64, sweep_degrees: f64) -> Arc {
    Arc::new(
        center,
        (radius, radius),
        -start_degrees.to_radians(),
        -sweep_degrees.to_radians(),
        0.0,
    )
}

/// Appends a straight line to the start of `arc`, then the arc itself as
/// cubic segments within [`ARC_TOLERANCE`].
pub fn arc_to(path: &mut BezPath, arc: &Arc) {
    let (sin, cos) = arc.start_angle.sin_cos();
    let offset =
        Affine::rotate(arc.x_rotation) * Point::new(arc.radii.x * cos, arc.radii.y * sin);
    path.line_to(arc.center + offset.to_vec2());
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, GEOMETRY_EPSILON};

    fn end_point(el: PathEl) -> Option<Point> {
        match el {
            PathEl::MoveTo(p)
            | PathEl::LineTo(p)
            | PathEl::QuadTo(_, p)
            | PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        }
    }

    #[test]
    fn point_on_circle_uses_screen_counter_clockwise_angles() {
        let up = point_on_circle(Point::ORIGIN, 10.0, 90.0);
        assert_abs_diff_eq!(up.x, 0.0, epsilon = GEOMETRY_EPSILON);
        assert_abs_diff_eq!(up.y, -10.0, epsilon = GEOMETRY_EPSILON);
    }

    #[test]
    fn screen_angle_inverts_point_on_circle() {
        for degrees in [-135.0, -30.0, 0.0, 45.0, 170.0] {
            let p = point_on_circle(Point::ORIGIN, 3.0, degrees);
            assert_abs_diff_eq!(screen_angle_degrees(p), degrees, epsilon = GEOMETRY_EPSILON);
        }
    }

    #[test]
    fn rotation_quarter_turn_is_clockwise_on_screen() {
        let p = rotation(90.0) * Point::new(1.0, 0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = GEOMETRY_EPSILON);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = GEOMETRY_EPSILON);
    }

    #[test]
    fn shrink_moves_every_edge_inwards() {
        let rect = shrink(centered_square(1000.0), 75.0);
        assert_abs_diff_eq!(rect.x0, -425.0);
        assert_abs_diff_eq!(rect.x1, 425.0);
        assert_abs_diff_eq!(rect.y0, -425.0);
        assert_abs_diff_eq!(rect.y1, 425.0);
        assert_eq!(rect.center(), Point::ORIGIN);
    }

    #[test]
    fn shrinking_past_the_center_is_degenerate() {
        let rect = centered_square(100.0);
        assert!(!is_degenerate(shrink(rect, 49.0)));
        assert!(is_degenerate(shrink(rect, 50.0)));
        assert!(is_degenerate(shrink(rect, 60.0)));
        assert!(is_degenerate(Rect::new(0.0, 0.0, f64::NAN, 1.0)));
    }

    #[test]
    fn arc_to_starts_and_ends_on_the_circle() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        arc_to(&mut path, &screen_arc(Point::ORIGIN, 10.0, 0.0, -90.0));

        let elements = path.elements();
        assert_eq!(elements[1], PathEl::LineTo(Point::new(10.0, 0.0)));
        // A clockwise quarter turn from +x ends straight down on screen
        let end = elements.last().copied().and_then(end_point).expect("arc end");
        assert_abs_diff_eq!(end.x, 0.0, epsilon = GEOMETRY_EPSILON);
        assert_abs_diff_eq!(end.y, 10.0, epsilon = GEOMETRY_EPSILON);
        for el in &elements[2..] {
            let p = end_point(*el).expect("curve");
            assert_abs_diff_eq!(p.distance(Point::ORIGIN), 10.0, epsilon = GEOMETRY_EPSILON);
        }
    }

    #[test]
    fn arc_segment_count_is_bounded() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        arc_to(&mut path, &screen_arc(Point::ORIGIN, 1e6, 0.0, 359.0));
        assert!(path.elements().len() < 64, "{} elements", path.elements().len());
    }
}
