//! Cubic Bezier evaluation and smooth control-point fitting.
//!
//! `bezier_control_points` fits one cubic per consecutive pair of data points
//! so that the joined curve is C² at interior points (natural end conditions),
//! by solving the usual tridiagonal system for the first control points.

use crate::error::{GeomError, Result};
use crate::geom2::Point;

/// One cubic Bezier piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl BezierSegment {
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        cubic_bezier_at(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }
}

/// Point at parameter `t` on the cubic `start, c1, c2, end`.
pub fn cubic_bezier_at(start: Point, c1: Point, c2: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    start * b0 + c1 * b1 + c2 * b2 + end * b3
}

/// Smooth cubic pieces through `points` (one per consecutive pair).
pub fn bezier_control_points(points: &[Point]) -> Result<Vec<BezierSegment>> {
    if points.len() < 2 {
        return Err(GeomError::invalid(format!(
            "bezier fitting needs at least 2 points, got {}",
            points.len()
        )));
    }
    let n = points.len() - 1;
    if n == 1 {
        // Straight line: controls at 1/3 and 2/3.
        let c1 = (points[0] * 2.0 + points[1]) * (1.0 / 3.0);
        let c2 = c1 * 2.0 - points[0];
        return Ok(vec![BezierSegment {
            start: points[0],
            ctrl1: c1,
            ctrl2: c2,
            end: points[1],
        }]);
    }

    let mut rhs = vec![Point::ZERO; n];
    rhs[0] = points[0] + points[1] * 2.0;
    for i in 1..n - 1 {
        rhs[i] = points[i] * 4.0 + points[i + 1] * 2.0;
    }
    rhs[n - 1] = (points[n - 1] * 8.0 + points[n]) * 0.5;
    let first = solve_first_controls(&rhs);

    let segments = (0..n)
        .map(|i| {
            let ctrl2 = if i < n - 1 {
                points[i + 1] * 2.0 - first[i + 1]
            } else {
                (points[n] + first[n - 1]) * 0.5
            };
            BezierSegment {
                start: points[i],
                ctrl1: first[i],
                ctrl2,
                end: points[i + 1],
            }
        })
        .collect();
    Ok(segments)
}

/// Thomas algorithm for the tridiagonal system with diagonal `2, 4, …, 4, 3.5`
/// and unit off-diagonals; both coordinates solved at once.
fn solve_first_controls(rhs: &[Point]) -> Vec<Point> {
    let n = rhs.len();
    let mut x = vec![Point::ZERO; n];
    let mut tmp = vec![0.0; n];
    let mut b = 2.0;
    x[0] = rhs[0] * (1.0 / b);
    for i in 1..n {
        tmp[i] = 1.0 / b;
        b = if i < n - 1 { 4.0 } else { 3.5 } - tmp[i];
        x[i] = (rhs[i] - x[i - 1]) * (1.0 / b);
    }
    for i in 1..n {
        x[n - i - 1] = x[n - i - 1] - x[n - i] * tmp[n - i];
    }
    x
}
