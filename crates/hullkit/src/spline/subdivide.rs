//! Densify a coarse polyline by sampling a curve through its points.
//!
//! All three variants return exactly `(n - 1) * subdivisions + 1` points with
//! input point `i` at output index `i * subdivisions`.

use super::catmull_rom::CatmullRom;
use crate::error::{GeomError, Result};
use crate::geom2::Point;

fn check_input(points: &[Point], subdivisions: usize) -> Result<()> {
    if points.len() < 3 {
        return Err(GeomError::invalid(format!(
            "subdivision needs at least 3 points, got {}",
            points.len()
        )));
    }
    if subdivisions == 0 {
        return Err(GeomError::invalid("subdivisions must be >= 1"));
    }
    Ok(())
}

/// Sample `subdivisions` steps per segment from segment curves built by `seg`.
///
/// The last sample of each segment coincides with the first of the next one,
/// so only the final segment contributes its `t = 1` sample.
fn sample_segments<F>(points: &[Point], subdivisions: usize, seg: F) -> Vec<Point>
where
    F: Fn(usize) -> CatmullRom,
{
    let n = points.len();
    let step = 1.0 / subdivisions as f64;
    let mut out = Vec::with_capacity((n - 1) * subdivisions + 1);
    for i in 0..n - 1 {
        let crs = seg(i);
        for j in 0..subdivisions {
            out.push(crs.point_at(j as f64 * step));
        }
    }
    out.push(seg(n - 2).point_at(1.0));
    out
}

/// Catmull-Rom through an open polyline; the missing outer controls clamp
/// to the first/last point.
pub fn subdivide_clamped(points: &[Point], subdivisions: usize) -> Result<Vec<Point>> {
    check_input(points, subdivisions)?;
    let n = points.len();
    Ok(sample_segments(points, subdivisions, |i| {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p3 = if i + 2 == n { points[n - 1] } else { points[i + 2] };
        CatmullRom::new(p0, points[i], points[i + 1], p3)
    }))
}

/// Catmull-Rom through a closed ring (`points[n-1] == points[0]`).
///
/// Neighbours wrap: the control before the first point is `points[n-2]`,
/// the control after the last point is `points[1]`.
pub fn subdivide_closed(points: &[Point], subdivisions: usize) -> Result<Vec<Point>> {
    check_input(points, subdivisions)?;
    let n = points.len();
    Ok(sample_segments(points, subdivisions, |i| {
        let p0 = if i == 0 { points[n - 2] } else { points[i - 1] };
        let p3 = if i == n - 2 { points[1] } else { points[i + 2] };
        CatmullRom::new(p0, points[i], points[i + 1], p3)
    }))
}

/// Evenly spaced points along straight segments (no curvature).
pub fn subdivide_linear(points: &[Point], subdivisions: usize) -> Result<Vec<Point>> {
    check_input(points, subdivisions)?;
    let step = 1.0 / subdivisions as f64;
    let mut out = Vec::with_capacity((points.len() - 1) * subdivisions + 1);
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        for j in 0..subdivisions {
            out.push(a + (b - a) * (j as f64 * step));
        }
    }
    out.extend(points.last().copied());
    Ok(out)
}
