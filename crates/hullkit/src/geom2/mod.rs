//! 2D primitives shared by every algorithm in the crate.
//!
//! - `Point`: value type with vector algebra and epsilon equality.
//! - `Bounds`: axis-aligned box.
//! - `bearing`, `CardinalDirection`: compass helpers.
//! - `cfg`: tolerance constants.
//! - `rand`: reproducible point-cloud samplers.

mod bearing;
mod bounds;
pub mod cfg;
mod point;
pub mod rand;

pub use bearing::{bearing, CardinalDirection};
pub use bounds::Bounds;
pub use point::Point;

/// `|dy| < EPSILON`.
#[inline]
pub fn is_horizontal(p1: Point, p2: Point) -> bool {
    (p1.y - p2.y).abs() < cfg::EPSILON
}

/// `|dx| < EPSILON`.
#[inline]
pub fn is_vertical(p1: Point, p2: Point) -> bool {
    (p1.x - p2.x).abs() < cfg::EPSILON
}

/// Neither horizontal nor vertical.
#[inline]
pub fn is_diagonal(p1: Point, p2: Point) -> bool {
    !is_horizontal(p1, p2) && !is_vertical(p1, p2)
}

/// Signed orientation of `c` relative to the directed line `a → b`:
/// `(b - a) × (c - a)`. Positive means counterclockwise (y-up).
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_classification() {
        let a = Point::new(0.0, 0.0);
        assert!(is_horizontal(a, Point::new(5.0, 1e-7)));
        assert!(is_vertical(a, Point::new(-1e-7, 5.0)));
        assert!(is_diagonal(a, Point::new(1.0, 1.0)));
        assert!(!is_diagonal(a, a));
    }

    #[test]
    fn orientation_sign() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(orient(a, b, Point::new(0.5, 1.0)) > 0.0);
        assert!(orient(a, b, Point::new(0.5, -1.0)) < 0.0);
        assert_eq!(orient(a, b, Point::new(7.0, 0.0)), 0.0);
    }
}
