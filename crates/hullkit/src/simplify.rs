//! Bearing-based polyline simplification.
//!
//! Drops points that do not visibly change the path (near-collinear, tiny
//! deviation, too close to their predecessor) while keeping right angles and
//! probable corners. End points always survive.
//!
//! Rule chain for the middle point `p2` of a triple `(p1, p2, p3)`, first
//! match wins (`delta = |bearing(p1,p2) - bearing(p2,p3)|`):
//! 1. `delta < 0.5°`: drop.
//! 2. `delta` a multiple of 90°: keep.
//! 3. `80° < delta < 90°`: keep.
//! 4. `bearing(p1,p3)` within the half-tolerance of `bearing(p1,p2)`: drop.
//! 5. `|p1 p2| < min_distance`: drop.
//! 6. keep.

use tracing::debug;

use crate::geom2::cfg::{
    COLLINEAR_BEARING_DEG, DEDUP_DISTANCE, PROBABLE_CORNER_DEG, RIGHT_ANGLE_EPS,
};
use crate::geom2::{bearing, Point};
use crate::polyline::duplicate_mask;

/// Simplifier knobs. Negative values select the built-in fallbacks
/// (0.5° half-tolerance, 1.0 minimum distance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimplifyCfg {
    /// Full angle tolerance in degrees; half of it is applied on each side.
    pub angle_tolerance: f64,
    pub min_distance: f64,
}

impl Default for SimplifyCfg {
    fn default() -> Self {
        Self {
            angle_tolerance: 1.0,
            min_distance: 1.0,
        }
    }
}

impl SimplifyCfg {
    #[inline]
    fn half_tolerance(&self) -> f64 {
        if self.angle_tolerance < 0.0 {
            0.5
        } else {
            self.angle_tolerance / 2.0
        }
    }

    #[inline]
    fn min_distance(&self) -> f64 {
        if self.min_distance < 0.0 {
            1.0
        } else {
            self.min_distance
        }
    }
}

/// Shorthand for [`simplify_with`].
pub fn simplify(points: &[Point], angle_tolerance: f64, min_distance: f64) -> Vec<Point> {
    simplify_with(
        points,
        &SimplifyCfg {
            angle_tolerance,
            min_distance,
        },
    )
}

/// Simplify an ordered polyline. Inputs of four points or fewer come back
/// unchanged.
///
/// Every decision is taken on the input indices, so repeated coordinates are
/// never removed as a side effect of removing an equal-looking neighbour.
pub fn simplify_with(points: &[Point], cfg: &SimplifyCfg) -> Vec<Point> {
    let n = points.len();
    if n <= 4 {
        return points.to_vec();
    }
    let tol = cfg.half_tolerance();
    let min_dist = cfg.min_distance();

    let mut drop = duplicate_mask(points, DEDUP_DISTANCE);
    // Interior points only; the last of them is the tail check over the final
    // four points.
    for i in 1..n - 1 {
        if drops_middle(points[i - 1], points[i], points[i + 1], tol, min_dist) {
            drop[i] = true;
        }
    }

    let out: Vec<Point> = points
        .iter()
        .zip(&drop)
        .filter_map(|(p, &d)| (!d).then_some(*p))
        .collect();
    debug!(input = n, output = out.len(), "simplified polyline");
    out
}

fn drops_middle(p1: Point, p2: Point, p3: Point, tol: f64, min_dist: f64) -> bool {
    let b12 = bearing(p1, p2);
    let b13 = bearing(p1, p3);
    let b23 = bearing(p2, p3);
    let delta = (b12 - b23).abs();

    if delta < COLLINEAR_BEARING_DEG {
        return true;
    }
    if is_right_angle_multiple(delta) {
        return false;
    }
    let (lo, hi) = PROBABLE_CORNER_DEG;
    if delta > lo && delta < hi {
        return false;
    }
    if b13 > b12 - tol && b13 < b12 + tol {
        return true;
    }
    p1.distance_to(p2) < min_dist
}

#[inline]
fn is_right_angle_multiple(delta: f64) -> bool {
    let r = delta % 90.0;
    r < RIGHT_ANGLE_EPS || 90.0 - r < RIGHT_ANGLE_EPS
}
