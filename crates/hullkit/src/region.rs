//! Point-in-region predicates and segment/line utilities.
//!
//! Angles handed to the ring-segment predicates use the dial convention of the
//! rendering layer: 0° at 12 o'clock via a 90° offset on `atan2`.

use nalgebra::Matrix2;

use crate::geom2::cfg::EPSILON;
use crate::geom2::{Bounds, Point};

/// Inclusive on all four sides.
#[inline]
pub fn in_rectangle(x: f64, y: f64, bounds: &Bounds) -> bool {
    bounds.contains(x, y)
}

/// Strictly inside: a point at exactly `radius` is outside.
#[inline]
pub fn in_circle(x: f64, y: f64, center: Point, radius: f64) -> bool {
    Point::new(x, y).distance_to(center) < radius
}

/// `((x-cx)/rx)² + ((y-cy)/ry)² <= 1`.
#[inline]
pub fn in_ellipse(x: f64, y: f64, center: Point, rx: f64, ry: f64) -> bool {
    let dx = x - center.x;
    let dy = y - center.y;
    (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
}

/// Even-odd ray casting; the edge from the last vertex back to the first is
/// implied. An empty polygon contains nothing.
pub fn in_polygon(x: f64, y: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Angle of `(x, y)` around `center` in degrees, `[0, 360)`, shifted by
/// `offset` (90 puts 0° at 12 o'clock).
pub fn angle_from_xy(x: f64, y: f64, center: Point, offset: f64) -> f64 {
    let theta = (y - center.y).atan2(x - center.x).to_degrees();
    let theta = if theta >= 0.0 { theta } else { theta + 360.0 };
    (theta + offset).rem_euclid(360.0)
}

/// Annular sector test: radius in `[inner, outer]` and dial angle in
/// `[start_angle, start_angle + sweep]`, both inclusive. The range does not
/// wrap past 360.
pub fn in_ring_segment(
    x: f64,
    y: f64,
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    sweep: f64,
) -> bool {
    const OFFSET: f64 = 90.0;
    let r = Point::new(x, y).distance_to(center);
    let angle = angle_from_xy(x, y, center, OFFSET);
    r >= inner_radius
        && r <= outer_radius
        && angle >= start_angle
        && angle <= start_angle + sweep
}

/// Ring segment with no inner radius.
#[inline]
pub fn in_sector(x: f64, y: f64, center: Point, radius: f64, start_angle: f64, sweep: f64) -> bool {
    in_ring_segment(x, y, center, radius, 0.0, start_angle, sweep)
}

/// Distance from `p` to the segment `p1 p2` (not the infinite line).
///
/// A degenerate segment measures the distance to `p1`.
pub fn distance_from_point_to_line(p: Point, p1: Point, p2: Point) -> f64 {
    let d = p2 - p1;
    let len_sq = d.length_squared();
    let closest = if len_sq == 0.0 {
        p1
    } else {
        let t = (p - p1).dot(d) / len_sq;
        if t < 0.0 {
            p1
        } else if t > 1.0 {
            p2
        } else {
            p1 + d * t
        }
    };
    p.distance_to(closest)
}

/// `p` lies on the segment `p1 p2` within `EPSILON`.
#[inline]
pub fn is_point_on_line(p: Point, p1: Point, p2: Point) -> bool {
    distance_from_point_to_line(p, p1, p2) < EPSILON
}

/// Intersection of the infinite lines `a b` and `c d`.
///
/// Returns `None` when the determinant is exactly zero (parallel or
/// coincident lines).
pub fn line_line_intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    // a_i x + b_i y = c_i
    let (a1, b1) = (b.y - a.y, a.x - b.x);
    let c1 = a1 * a.x + b1 * a.y;
    let (a2, b2) = (d.y - c.y, c.x - d.x);
    let c2 = a2 * c.x + b2 * c.y;
    let det = Matrix2::new(a1, b1, a2, b2).determinant();
    if det == 0.0 {
        return None;
    }
    Some(Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det))
}

/// Rotate `p` by `angle_deg` (counterclockwise in y-up) around `center`.
pub fn rotate_point_around(p: Point, center: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let d = p - center;
    Point::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Point `distance` away from `p1` towards `p2` (extrapolates beyond `p2`).
/// Returns `p1` for a degenerate segment.
pub fn point_along(p1: Point, p2: Point, distance: f64) -> Point {
    let len = p1.distance_to(p2);
    if len == 0.0 {
        return p1;
    }
    let t = distance / len;
    p1 * (1.0 - t) + p2 * t
}

/// Where the line through `p1 p2` crosses the horizontal `y = y`.
/// `None` for a horizontal line.
pub fn horizontal_intersection(p1: Point, p2: Point, y: f64) -> Option<Point> {
    let dy = p2.y - p1.y;
    if dy.abs() < EPSILON {
        return None;
    }
    Some(Point::new(p1.x + (y - p1.y) * (p2.x - p1.x) / dy, y))
}

/// Relation between an infinite line and a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleContact {
    Intersects,
    Touches,
    Outside,
}

/// Classify the line through `p1 p2` against the circle.
///
/// The centre-to-line distance is rounded to one decimal before comparing,
/// so lines within ~0.05 of tangency count as touching.
pub fn line_circle_contact(p1: Point, p2: Point, center: Point, radius: f64) -> CircleContact {
    let a = p1.y - p2.y;
    let b = p2.x - p1.x;
    let c = p1.x * p2.y - p2.x * p1.y;
    let norm = a.hypot(b);
    let dist = if norm == 0.0 {
        p1.distance_to(center)
    } else {
        (a * center.x + b * center.y + c).abs() / norm
    };
    let dist = (dist * 10.0).round() / 10.0;
    if radius > dist {
        CircleContact::Intersects
    } else if radius < dist {
        CircleContact::Outside
    } else {
        CircleContact::Touches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_is_inclusive() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0);
        for c in b.corners() {
            assert!(in_rectangle(c.x, c.y, &b));
        }
        assert!(in_rectangle(2.5, 4.0, &b));
        assert!(!in_rectangle(4.0 + 1e-9, 3.0, &b));
    }

    #[test]
    fn circle_center_in_boundary_out() {
        let c = Point::new(3.0, -2.0);
        for r in [1e-6, 0.5, 10.0] {
            assert!(in_circle(c.x, c.y, c, r));
        }
        assert!(!in_circle(c.x + 2.0, c.y, c, 2.0));
        assert!(in_circle(c.x + 1.999, c.y, c, 2.0));
    }

    #[test]
    fn ellipse_boundary_counts() {
        let c = Point::new(0.0, 0.0);
        assert!(in_ellipse(4.0, 0.0, c, 4.0, 2.0));
        assert!(in_ellipse(0.0, -2.0, c, 4.0, 2.0));
        assert!(!in_ellipse(3.0, 1.5, c, 4.0, 2.0));
    }

    #[test]
    fn polygon_even_odd() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(in_polygon(5.0, 5.0, &square));
        assert!(!in_polygon(15.0, 5.0, &square));
        assert!(!in_polygon(5.0, -0.1, &square));
        // Concave "C": the notch is outside.
        let c_shape = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 7.0),
            Point::new(10.0, 7.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(!in_polygon(6.0, 5.0, &c_shape));
        assert!(in_polygon(1.0, 5.0, &c_shape));
        assert!(!in_polygon(0.0, 0.0, &[]));
    }

    #[test]
    fn dial_angles() {
        let c = Point::new(0.0, 0.0);
        assert!((angle_from_xy(1.0, 0.0, c, 90.0) - 90.0).abs() < 1e-12);
        assert!((angle_from_xy(0.0, -1.0, c, 90.0) - 0.0).abs() < 1e-12);
        assert!((angle_from_xy(-1.0, 0.0, c, 0.0) - 180.0).abs() < 1e-12);
        assert!((angle_from_xy(0.0, -1.0, c, 0.0) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn ring_segment_and_sector() {
        let c = Point::new(0.0, 0.0);
        // Dial angles [0, 90]: from (0, -r) round to (r, 0).
        assert!(in_sector(0.0, -5.0, c, 10.0, 0.0, 90.0));
        assert!(in_sector(5.0, 0.0, c, 10.0, 0.0, 90.0));
        assert!(in_sector(1.0, -5.0, c, 10.0, 0.0, 90.0));
        assert!(!in_sector(1.0, 5.0, c, 10.0, 0.0, 90.0));
        assert!(!in_sector(0.0, 5.0, c, 10.0, 0.0, 90.0));
        assert!(!in_sector(-5.0, 0.0, c, 10.0, 0.0, 90.0));
        assert!(!in_sector(11.0, 0.0, c, 10.0, 0.0, 90.0));
        // Later start: (0, 5) sits at dial 180.
        assert!(in_sector(0.0, 5.0, c, 10.0, 135.0, 90.0));
        assert!(!in_sector(5.0, 0.0, c, 10.0, 135.0, 90.0));
        // Inner radius excludes the hole, boundaries inclusive.
        assert!(!in_ring_segment(2.0, 0.0, c, 10.0, 3.0, 0.0, 90.0));
        assert!(in_ring_segment(3.0, 0.0, c, 10.0, 3.0, 0.0, 90.0));
        assert!(in_ring_segment(10.0, 0.0, c, 10.0, 3.0, 0.0, 90.0));
    }

    #[test]
    fn segment_distance_clamps() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((distance_from_point_to_line(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
        assert!((distance_from_point_to_line(Point::new(-3.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((distance_from_point_to_line(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((distance_from_point_to_line(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-12);
        assert!(is_point_on_line(Point::new(7.5, 0.0), a, b));
        assert!(!is_point_on_line(Point::new(11.0, 0.0), a, b));
    }

    #[test]
    fn line_intersection() {
        let hit = line_line_intersection(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(hit, Some(Point::new(2.0, 2.0)));
        let again = line_line_intersection(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(hit, again);
        // y = 0 and y = 1
        assert!(line_line_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn rotation_and_along() {
        let p = rotate_point_around(Point::new(2.0, 1.0), Point::new(1.0, 1.0), 90.0);
        assert!(p.approx_eq(Point::new(1.0, 2.0), 1e-12));
        let q = point_along(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 2.5);
        assert_eq!(q, Point::new(0.0, 2.5));
        let same = Point::new(3.0, 3.0);
        assert_eq!(point_along(same, same, 1.0), same);
    }

    #[test]
    fn horizontal_crossing() {
        let x = horizontal_intersection(Point::new(0.0, 0.0), Point::new(2.0, 4.0), 3.0);
        assert_eq!(x, Some(Point::new(1.5, 3.0)));
        let v = horizontal_intersection(Point::new(5.0, 0.0), Point::new(5.0, 4.0), 1.0);
        assert_eq!(v, Some(Point::new(5.0, 1.0)));
        assert!(horizontal_intersection(Point::new(0.0, 2.0), Point::new(9.0, 2.0), 1.0).is_none());
    }

    #[test]
    fn circle_contact() {
        let c = Point::new(0.0, 0.0);
        let (a, b) = (Point::new(-10.0, 1.0), Point::new(10.0, 1.0));
        assert_eq!(line_circle_contact(a, b, c, 2.0), CircleContact::Intersects);
        assert_eq!(line_circle_contact(a, b, c, 1.0), CircleContact::Touches);
        assert_eq!(line_circle_contact(a, b, c, 0.5), CircleContact::Outside);
        // Rounded distance: 1.04 counts as 1.0.
        let (a, b) = (Point::new(-10.0, 1.04), Point::new(10.0, 1.04));
        assert_eq!(line_circle_contact(a, b, c, 1.0), CircleContact::Touches);
    }
}
