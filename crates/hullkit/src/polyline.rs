//! Small helpers over ordered point sequences.

use crate::error::{GeomError, Result};
use crate::geom2::cfg::SPARK_LINE_SUBDIVISIONS;
use crate::geom2::{Bounds, Point};
use crate::spline::subdivide_clamped;

/// Indices `i + 1` with `|p_i p_{i+1}| <= tolerance`, for `i` in `0..n-2`.
///
/// The final pair is not examined, so the last point always survives.
pub(crate) fn duplicate_mask(points: &[Point], tolerance: f64) -> Vec<bool> {
    let tol = tolerance.max(0.0);
    let mut mask = vec![false; points.len()];
    for i in 0..points.len().saturating_sub(2) {
        if points[i].distance_to(points[i + 1]) <= tol {
            mask[i + 1] = true;
        }
    }
    mask
}

/// Drop points that sit within `tolerance` of their predecessor
/// (negative tolerance is treated as 0).
pub fn remove_duplicate_points(points: &[Point], tolerance: f64) -> Vec<Point> {
    let mask = duplicate_mask(points, tolerance);
    points
        .iter()
        .zip(mask)
        .filter_map(|(p, dup)| (!dup).then_some(*p))
        .collect()
}

/// Append the first point if the sequence does not already end with it.
pub fn close_ring(points: &[Point]) -> Vec<Point> {
    let mut ring = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}

/// Sort by x, then y.
pub fn sort_xy(points: &mut [Point]) {
    points.sort_by(Point::cmp_xy);
}

/// Index of the point closest to `p` (first minimum wins).
#[inline]
pub fn nearest_point(p: Point, points: &[Point]) -> Option<usize> {
    p.nearest(points)
}

/// Greedy nearest-neighbour chain: start at the point closest to the origin,
/// then repeatedly step to the closest unused point. `counter_clockwise`
/// reverses the finished chain.
pub fn sort_by_distance(points: &[Point], counter_clockwise: bool) -> Vec<Point> {
    let mut pool = points.to_vec();
    let mut out = Vec::with_capacity(pool.len());
    let mut cursor = Point::ZERO;
    while let Some(i) = cursor.nearest(&pool) {
        cursor = pool.swap_remove(i);
        out.push(cursor);
    }
    if counter_clockwise {
        out.reverse();
    }
    out
}

/// Map a data series into `bounds` (x evenly spaced over `count` slots,
/// larger values higher on screen, i.e. smaller y) and smooth it.
///
/// A flat series falls back to `min_value..max_value` as its value range.
pub fn spark_line(
    values: &[f64],
    min_value: f64,
    max_value: f64,
    bounds: &Bounds,
    count: usize,
) -> Result<Vec<Point>> {
    if count < 2 {
        return Err(GeomError::invalid(format!(
            "spark line needs at least 2 slots, got {count}"
        )));
    }
    let (mut low, mut high) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if (high - low).abs() < f64::EPSILON {
        low = min_value;
        high = max_value;
    }
    let range = high - low;
    if range == 0.0 || !range.is_finite() {
        return Err(GeomError::degenerate("spark line value range is empty"));
    }
    let step_x = bounds.width / (count - 1) as f64;
    let step_y = bounds.height / range;
    let pts: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Point::new(
                bounds.min_x() + i as f64 * step_x,
                bounds.max_y() - (low - v).abs() * step_y,
            )
        })
        .collect();
    subdivide_clamped(&pts, SPARK_LINE_SUBDIVISIONS)
}
