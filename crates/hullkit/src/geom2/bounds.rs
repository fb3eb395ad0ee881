use super::Point;

/// Axis-aligned box `{x, y, width, height}` with `width, height >= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Negative (or NaN) extents clamp to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Smallest box containing both corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (b.x - a.x).abs(),
            (b.y - a.y).abs(),
        )
    }

    /// Bounding box of a point set; `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::from_corners(min, max))
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Inclusive on all four sides.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    /// Boxes touching along an edge count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        other.max_x() >= self.min_x()
            && other.max_y() >= self.min_y()
            && other.min_x() <= self.max_x()
            && other.min_y() <= self.max_y()
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extent_clamps() {
        let b = Bounds::new(1.0, 1.0, -3.0, 2.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 2.0);
    }

    #[test]
    fn corners_are_contained() {
        let b = Bounds::new(-1.0, 2.0, 4.0, 3.0);
        for c in b.corners() {
            assert!(b.contains(c.x, c.y));
        }
        assert!(!b.contains(3.0 + 1e-9, 2.0));
        assert_eq!(b.center(), Point::new(1.0, 3.5));
    }

    #[test]
    fn from_corners_and_enclosing() {
        let b = Bounds::from_corners(Point::new(4.0, 0.0), Point::new(1.0, 5.0));
        assert_eq!(b, Bounds::new(1.0, 0.0, 3.0, 5.0));
        let pts = [Point::new(2.0, 2.0), Point::new(-1.0, 4.0), Point::new(0.0, -3.0)];
        assert_eq!(Bounds::enclosing(&pts), Some(Bounds::new(-1.0, -3.0, 3.0, 7.0)));
        assert_eq!(Bounds::enclosing(&[]), None);
    }

    #[test]
    fn intersection_touching_edges() {
        let a = Bounds::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(&Bounds::new(1.0, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&Bounds::new(1.5, 0.0, 1.0, 1.0)));
    }
}
