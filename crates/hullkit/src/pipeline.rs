//! Raw point set to renderable boundary in one call.
//!
//! Stages: optional simplification, convex hull, closing, optional hull
//! reduction, closed Catmull-Rom subdivision.

use tracing::debug;

use crate::error::{GeomError, Result};
use crate::geom2::Point;
use crate::hull::{convex_hull, reduce_hull_with, ReduceCfg};
use crate::polyline::close_ring;
use crate::simplify::{simplify_with, SimplifyCfg};
use crate::spline::subdivide_closed;

#[derive(Clone, Copy, Debug)]
pub struct BoundaryCfg {
    /// Simplify the raw points before building the hull.
    pub simplify: Option<SimplifyCfg>,
    /// Run hull reduction on the closed hull.
    pub reduce: bool,
    /// Samples per edge; `<= 1` returns the closed ring unsmoothed.
    pub subdivisions: usize,
}

impl Default for BoundaryCfg {
    fn default() -> Self {
        Self {
            simplify: None,
            reduce: false,
            subdivisions: 8,
        }
    }
}

/// Closed boundary ring around `points`.
///
/// Fails with `DegenerateGeometry` when the hull has fewer than 3 vertices.
pub fn boundary(points: &[Point], cfg: &BoundaryCfg) -> Result<Vec<Point>> {
    let simplified;
    let input = match &cfg.simplify {
        Some(s) => {
            simplified = simplify_with(points, s);
            simplified.as_slice()
        }
        None => points,
    };

    let hull = convex_hull(input);
    if hull.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "boundary needs a hull with at least 3 vertices, got {}",
            hull.len()
        )));
    }
    let ring = if cfg.reduce {
        // Reduction draws candidates from the full input, not the simplified one.
        reduce_hull_with(points, &hull, &ReduceCfg::default()).points
    } else {
        close_ring(&hull)
    };
    debug!(
        input = points.len(),
        hull = hull.len(),
        ring = ring.len(),
        "boundary ring built"
    );

    if cfg.subdivisions > 1 {
        subdivide_closed(&ring, cfg.subdivisions)
    } else {
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_cloud() -> Vec<Point> {
        let mut pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        pts.extend((1..10).map(|i| Point::new(i as f64, (i * 7 % 10) as f64)));
        pts
    }

    #[test]
    fn unsmoothed_ring_is_closed_hull() {
        let cfg = BoundaryCfg {
            subdivisions: 1,
            ..BoundaryCfg::default()
        };
        let ring = boundary(&square_cloud(), &cfg).unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
    }

    #[test]
    fn smoothed_ring_has_expected_length() {
        let ring = boundary(&square_cloud(), &BoundaryCfg::default()).unwrap();
        assert_eq!(ring.len(), 4 * 8 + 1);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn reduction_feeds_subdivision() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.5),
        ];
        let cfg = BoundaryCfg {
            reduce: true,
            subdivisions: 1,
            ..BoundaryCfg::default()
        };
        let ring = boundary(&pts, &cfg).unwrap();
        assert!(ring.len() >= 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn collinear_input_is_degenerate() {
        let line: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        assert!(matches!(
            boundary(&line, &BoundaryCfg::default()),
            Err(GeomError::DegenerateGeometry { .. })
        ));
        let simplified = BoundaryCfg {
            simplify: Some(SimplifyCfg::default()),
            ..BoundaryCfg::default()
        };
        assert!(boundary(&line, &simplified).is_err());
    }
}
