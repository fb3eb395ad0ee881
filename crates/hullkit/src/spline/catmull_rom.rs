use nalgebra::{Matrix4, Matrix4x2, RowVector4};

use crate::geom2::Point;

/// Uniform Catmull-Rom segment between `p1` (t = 0) and `p2` (t = 1).
///
/// `p0` precedes the segment and `p3` follows it; callers duplicate an end
/// point or wrap around a closed ring when a neighbour is missing.
#[derive(Clone, Copy, Debug)]
pub struct CatmullRom {
    ctrl: Matrix4x2<f64>,
}

impl CatmullRom {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            ctrl: Matrix4x2::new(
                p0.x, p0.y, //
                p1.x, p1.y, //
                p2.x, p2.y, //
                p3.x, p3.y,
            ),
        }
    }

    /// `q(t) = ½ · [1 t t² t³] · M · [p0 p1 p2 p3]ᵀ`.
    ///
    /// Values of `t` outside [0, 1] extrapolate along the same cubic.
    pub fn point_at(&self, t: f64) -> Point {
        let powers = RowVector4::new(1.0, t, t * t, t * t * t);
        let q = powers * basis() * self.ctrl * 0.5;
        Point::new(q[(0, 0)], q[(0, 1)])
    }
}

/// Catmull-Rom characteristic matrix (tension ½ applied in `point_at`).
#[inline]
fn basis() -> Matrix4<f64> {
    Matrix4::new(
        0.0, 2.0, 0.0, 0.0, //
        -1.0, 0.0, 1.0, 0.0, //
        2.0, -5.0, 4.0, -1.0, //
        -1.0, 3.0, -3.0, 1.0,
    )
}

/// One-shot evaluation of the segment `p1 → p2` at `t`.
#[inline]
pub fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    CatmullRom::new(p0, p1, p2, p3).point_at(t)
}
