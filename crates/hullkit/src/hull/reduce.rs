//! Hull reduction: pull diagonal hull edges towards the data.
//!
//! Each pass walks the closed ring and, for every diagonal edge, inserts the
//! closest unused input point lying in the edge's bounding box. The result is
//! biased towards an axis-aligned silhouette. The loop is a greedy heuristic;
//! diagonals without a usable candidate stay diagonal and are reported.

use tracing::{debug, warn};

use crate::geom2::cfg::MAX_REDUCE_PASSES;
use crate::geom2::{is_diagonal, Bounds, Point};
use crate::polyline::close_ring;
use crate::region::{distance_from_point_to_line, is_point_on_line};

#[derive(Clone, Copy, Debug)]
pub struct ReduceCfg {
    /// Safety cap on passes over the ring.
    pub max_passes: usize,
}

impl Default for ReduceCfg {
    fn default() -> Self {
        Self {
            max_passes: MAX_REDUCE_PASSES,
        }
    }
}

/// Outcome of `reduce_hull_with`.
#[derive(Clone, Debug)]
pub struct HullReduction {
    /// Closed ring (`points[0] == points[len-1]`).
    pub points: Vec<Point>,
    pub passes: usize,
    /// Diagonal edges left in `points`.
    pub diagonal_edges: usize,
    /// The pass cap stopped the loop while diagonals remained.
    pub capped: bool,
}

/// `reduce_hull_with` using the default pass cap; returns the closed ring.
pub fn reduce_hull(points: &[Point], hull: &[Point]) -> Vec<Point> {
    reduce_hull_with(points, hull, &ReduceCfg::default()).points
}

/// Reduce the diagonals of `hull` with candidates from `points`.
///
/// `hull` may be open or closed; the result is always closed.
pub fn reduce_hull_with(points: &[Point], hull: &[Point], cfg: &ReduceCfg) -> HullReduction {
    let mut ring = close_ring(hull);
    let mut pool = remove_points_on_hull(points, &ring);
    let mut passes = 0;
    let mut capped = false;

    loop {
        if diagonal_edge_count(&ring) == 0 {
            break;
        }
        if passes >= cfg.max_passes {
            capped = true;
            break;
        }
        passes += 1;

        let mut next = Vec::with_capacity(ring.len() * 2);
        let mut inserted = 0usize;
        for w in ring.windows(2) {
            let (a, b) = (w[0], w[1]);
            next.push(a);
            if !is_diagonal(a, b) {
                continue;
            }
            if let Some(i) = closest_in_area(&pool, a, b) {
                next.push(pool.swap_remove(i));
                inserted += 1;
            }
        }
        next.extend(ring.last().copied());
        ring = next;
        if inserted == 0 {
            break;
        }
    }

    let diagonal_edges = diagonal_edge_count(&ring);
    if capped {
        warn!(
            passes,
            diagonal_edges, "hull reduction hit its pass cap; returning partial result"
        );
    } else {
        debug!(passes, vertices = ring.len(), diagonal_edges, "hull reduced");
    }
    HullReduction {
        points: ring,
        passes,
        diagonal_edges,
        capped,
    }
}

/// Unused candidate inside the edge's box with the smallest distance to the
/// segment; ties go to the earlier pool entry.
fn closest_in_area(pool: &[Point], a: Point, b: Point) -> Option<usize> {
    let area = Bounds::from_corners(a, b);
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in pool.iter().enumerate() {
        if !area.contains(p.x, p.y) || p == a || p == b {
            continue;
        }
        let d = distance_from_point_to_line(p, a, b);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Consecutive edges of `ring` plus the closing edge last → first.
fn ring_edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Number of diagonal edges, counting the closing edge last → first.
pub fn diagonal_edge_count(ring: &[Point]) -> usize {
    ring_edges(ring).filter(|&(a, b)| is_diagonal(a, b)).count()
}

/// Bounding box of every diagonal edge.
pub fn diagonal_areas(ring: &[Point]) -> Vec<Bounds> {
    ring_edges(ring)
        .filter(|&(a, b)| is_diagonal(a, b))
        .map(|(a, b)| Bounds::from_corners(a, b))
        .collect()
}

/// Points inside at least one diagonal area of `ring`.
pub fn points_to_check(points: &[Point], ring: &[Point]) -> Vec<Point> {
    let areas = diagonal_areas(ring);
    points
        .iter()
        .copied()
        .filter(|p| areas.iter().any(|a| a.contains(p.x, p.y)))
        .collect()
}

/// Points not lying on any edge of `ring` (vertices included).
pub fn remove_points_on_hull(points: &[Point], ring: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| !ring.windows(2).any(|w| is_point_on_line(p, w[0], w[1])))
        .filter(|p| !ring.contains(p))
        .collect()
}

/// Walk the open curve `curve` and splice in every point of `points` that
/// lies on one of its segments, ordered by distance from the segment start.
///
/// Points already on the curve as vertices are not added again.
pub fn add_points_on_curve(curve: &[Point], points: &[Point]) -> Vec<Point> {
    let extra: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| !curve.contains(p))
        .collect();
    let mut out = Vec::with_capacity(curve.len() + extra.len());
    for w in curve.windows(2) {
        let (a, b) = (w[0], w[1]);
        out.push(a);
        let mut on: Vec<Point> = extra
            .iter()
            .copied()
            .filter(|&p| is_point_on_line(p, a, b))
            .collect();
        on.sort_by(|p, q| a.distance_squared_to(*p).total_cmp(&a.distance_squared_to(*q)));
        out.extend(on);
    }
    out.extend(curve.last().copied());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Point> {
        vec![
            Point::new(0.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 0.0),
        ]
    }

    #[test]
    fn counts_include_closing_edge() {
        assert_eq!(diagonal_edge_count(&diamond()), 4);
        assert_eq!(diagonal_edge_count(&close_ring(&diamond())), 4);
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(diagonal_edge_count(&square), 0);
        assert!(diagonal_areas(&square).is_empty());
        assert!(diagonal_edge_count(&[]) == 0);
    }

    #[test]
    fn areas_and_points_to_check() {
        let areas = diagonal_areas(&diamond());
        assert_eq!(areas.len(), 4);
        assert_eq!(areas[0], Bounds::new(0.0, 5.0, 5.0, 5.0));
        let pts = [Point::new(1.0, 9.0), Point::new(5.0, 5.0), Point::new(20.0, 20.0)];
        let picked = points_to_check(&pts, &diamond());
        assert_eq!(picked, vec![Point::new(1.0, 9.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn on_hull_points_are_not_candidates() {
        let ring = close_ring(&diamond());
        let pts = [
            Point::new(0.0, 5.0),
            Point::new(2.5, 7.5),
            Point::new(4.0, 6.0),
        ];
        assert_eq!(remove_points_on_hull(&pts, &ring), vec![Point::new(4.0, 6.0)]);
    }

    #[test]
    fn splices_points_on_curve_in_order() {
        let curve = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        let pts = [
            Point::new(7.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(10.0, 4.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ];
        let out = add_points_on_curve(&curve, &pts);
        assert_eq!(
            out,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(7.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 4.0),
                Point::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn staircase_resolves_diagonals() {
        // The long diagonal has four stair corners in its box.
        let hull = [
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 10.0),
            Point::new(0.0, 30.0),
        ];
        let stairs = [
            Point::new(10.0, 30.0),
            Point::new(10.0, 20.0),
            Point::new(20.0, 20.0),
            Point::new(20.0, 10.0),
        ];
        let mut data = stairs.to_vec();
        data.push(Point::new(5.0, 5.0));
        let red = reduce_hull_with(&data, &hull, &ReduceCfg::default());
        assert!(!red.capped);
        assert_eq!(red.points.first(), red.points.last());
        assert_eq!(red.diagonal_edges, 0);
        assert_eq!(diagonal_edge_count(&red.points), 0);
        assert_eq!(red.points.len(), 9);
        for s in stairs {
            assert!(red.points.contains(&s));
        }
        assert!(!red.points.contains(&Point::new(5.0, 5.0)));
        assert_eq!(red.points[..3], hull[..3]);
    }

    #[test]
    fn unresolvable_diagonal_is_left_and_reported() {
        let hull = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(10.0, 0.0)];
        let data = [Point::new(50.0, 50.0)];
        let red = reduce_hull_with(&data, &hull, &ReduceCfg::default());
        assert_eq!(red.passes, 1);
        assert_eq!(red.diagonal_edges, 1);
        assert!(!red.capped);
        assert_eq!(red.points.len(), 4);
    }

    #[test]
    fn pass_cap_is_reported() {
        let hull = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(10.0, 0.0)];
        let data = [Point::new(2.0, 8.0), Point::new(2.0, 2.0)];
        let red = reduce_hull_with(&data, &hull, &ReduceCfg { max_passes: 0 });
        assert!(red.capped);
        assert_eq!(red.passes, 0);
        assert_eq!(red.points, close_ring(&hull));
        let free = reduce_hull(&data, &hull);
        assert!(free.len() > red.points.len());
    }
}
