use std::cmp::Ordering;

use tracing::debug;

use crate::error::{GeomError, Result};
use crate::geom2::{orient, Point};
use crate::polyline::close_ring;
use crate::spline::subdivide_closed;

/// Pending QuickHull work. Each `Expand` owns the candidates strictly on the
/// positive side of its edge `a → b`.
enum Task {
    Expand { a: Point, b: Point, set: Vec<Point> },
    Emit(Point),
}

/// Convex hull by QuickHull, as an open ring.
///
/// Order: minimum `(x, y)` anchor, the chain left of min→max, the maximum
/// anchor, the chain left of max→min. In y-up coordinates that is clockwise
/// and every input point satisfies `orient(h[i], h[i+1], p) <= 0`.
/// Points on a hull edge are not vertices. Fewer than 3 inputs come back
/// unchanged; a set of identical points collapses to one vertex.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let (Some(&min), Some(&max)) = (
        points.iter().min_by(|a, b| a.cmp_xy(b)),
        points.iter().max_by(|a, b| a.cmp_xy(b)),
    ) else {
        return Vec::new();
    };
    if min.cmp_xy(&max) == Ordering::Equal {
        return vec![min];
    }

    let mut upper = Vec::new();
    let mut lower = Vec::new();
    for &p in points {
        let o = orient(min, max, p);
        if o > 0.0 {
            upper.push(p);
        } else if o < 0.0 {
            lower.push(p);
        }
    }

    // LIFO: push in reverse of the emission order.
    let mut work = vec![
        Task::Expand {
            a: max,
            b: min,
            set: lower,
        },
        Task::Emit(max),
        Task::Expand {
            a: min,
            b: max,
            set: upper,
        },
        Task::Emit(min),
    ];
    let mut hull = Vec::new();
    while let Some(task) = work.pop() {
        match task {
            Task::Emit(p) => hull.push(p),
            Task::Expand { a, b, set } => expand(a, b, set, &mut work),
        }
    }
    debug!(input = points.len(), vertices = hull.len(), "convex hull");
    hull
}

fn expand(a: Point, b: Point, set: Vec<Point>, work: &mut Vec<Task>) {
    match set.len() {
        0 => {}
        1 => work.push(Task::Emit(set[0])),
        _ => {
            let mut far = set[0];
            let mut best = orient(a, b, far).abs();
            for &p in &set[1..] {
                let d = orient(a, b, p).abs();
                if d > best {
                    best = d;
                    far = p;
                }
            }
            let (left, right): (Vec<Point>, Vec<Point>) = (
                set.iter().copied().filter(|&p| orient(a, far, p) > 0.0).collect(),
                set.iter().copied().filter(|&p| orient(far, b, p) > 0.0).collect(),
            );
            work.push(Task::Expand {
                a: far,
                b,
                set: right,
            });
            work.push(Task::Emit(far));
            work.push(Task::Expand {
                a,
                b: far,
                set: left,
            });
        }
    }
}

/// Convex hull closed into a ring and smoothed with Catmull-Rom
/// (`subdivisions` samples per hull edge).
pub fn smoothed_convex_hull(points: &[Point], subdivisions: usize) -> Result<Vec<Point>> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "convex hull has {} vertices, need at least 3",
            hull.len()
        )));
    }
    subdivide_closed(&close_ring(&hull), subdivisions)
}
