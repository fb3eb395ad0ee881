//! 2D point / vector value type.
//!
//! - `Point` is `Copy` and immutable by convention: every operation returns a
//!   new value.
//! - Equality is epsilon-based (`cfg::EPSILON` on each coordinate). Because
//!   that relation is not transitive, `Point` does not implement `Eq`/`Hash`;
//!   use `grid_key` to bucket coordinates when a hash key is needed.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;

use super::cfg::EPSILON;
use crate::error::{GeomError, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `length` along the direction `angle_rad` (0 = +x axis).
    #[inline]
    pub fn from_polar(length: f64, angle_rad: f64) -> Self {
        Self::new(length * angle_rad.cos(), length * angle_rad.sin())
    }

    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(self) -> Self {
        let mag = self.length();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Like `normalize`, but a zero-length input is an error.
    pub fn try_normalize(self) -> Result<Self> {
        let mag = self.length();
        if mag == 0.0 || !mag.is_finite() {
            return Err(GeomError::degenerate(format!(
                "cannot normalize vector {self} of length {mag}"
            )));
        }
        Ok(Self::new(self.x / mag, self.y / mag))
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared Euclidean distance; use where only ordering matters.
    #[inline]
    pub fn distance_squared_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counterclockwise of `self` (y-up).
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Signed angle in radians that rotates `self` onto `other`, in (-π, π].
    #[inline]
    pub fn angle_between(self, other: Point) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Unsigned angle in degrees between `self` and `other`, in [0, 180].
    ///
    /// The cosine is clamped to [-1, 1]; a zero-length operand yields 0°.
    pub fn angle_deg(self, other: Point) -> f64 {
        unsigned_angle_deg(self, other)
    }

    /// Unsigned angle in degrees at `self` between the rays towards `a` and `b`.
    pub fn angle_at(self, a: Point, b: Point) -> f64 {
        unsigned_angle_deg(a - self, b - self)
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Parallel (or anti-parallel) as vectors, within `EPSILON`.
    #[inline]
    pub fn is_collinear_with(self, other: Point) -> bool {
        self.cross(other).abs() < EPSILON
    }

    #[inline]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// Index of the point in `points` closest to `self` (first minimum wins).
    pub fn nearest(self, points: &[Point]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in points.iter().enumerate() {
            let d = self.distance_squared_to(*p);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Index of the closest point strictly within `radius`, if any.
    pub fn nearest_within_radius(self, points: &[Point], radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        self.nearest(points)
            .filter(|&i| self.distance_squared_to(points[i]) < r2)
    }

    /// Total lexicographic order on (x, y) using `f64::total_cmp`.
    #[inline]
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Coordinates rounded to multiples of `precision`, for use as a hash key.
    ///
    /// Two points with the same key are equal under `PartialEq` when
    /// `precision <= EPSILON`; the converse does not hold near bucket edges.
    pub fn grid_key(self, precision: f64) -> (i64, i64) {
        let p = if precision > 0.0 { precision } else { EPSILON };
        ((self.x / p).round() as i64, (self.y / p).round() as i64)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

fn unsigned_angle_deg(a: Point, b: Point) -> f64 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    let cos = a.dot(b) / denom;
    if cos > 1.0 {
        return 0.0;
    }
    if cos < -1.0 {
        return 180.0;
    }
    cos.acos().to_degrees()
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other, EPSILON)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"x\":{},\"y\":{}}}", self.x, self.y)
    }
}
