//! Axis-aligned bounding box.

use crate::primitives::Point2;
use geo::{CoordNum, Rect};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Boundaries are inclusive, so two
/// boxes that only share an edge or a corner still intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns the union of two AABBs (smallest AABB containing both).
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns `true` if this AABB intersects another AABB.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl<F: Float + CoordNum> From<Rect<F>> for Aabb2<F> {
    #[inline]
    fn from(rect: Rect<F>) -> Self {
        Self::from_corners(rect.min().into(), rect.max().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_from_corners() {
        // Corners in "wrong" order
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(aabb.min, Point2::new(0.0, 0.0));
        assert_eq!(aabb.max, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(coord! { x: 4.0, y: -1.0 }, coord! { x: -3.0, y: 5.0 });
        let aabb: Aabb2<f64> = rect.into();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
        assert_eq!(aabb.width(), 7.0);
        assert_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn test_center() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
        assert_eq!(aabb.center(), Point2::new(5.0, 2.0));
    }

    #[test]
    fn test_intersects() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = Aabb2::new(Point2::new(5.0, 5.0), Point2::new(15.0, 15.0));
        let c = Aabb2::new(Point2::new(20.0, 20.0), Point2::new(30.0, 30.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_intersects_shared_edge() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = Aabb2::new(Point2::new(10.0, 0.0), Point2::new(20.0, 10.0));
        assert!(a.intersects(b));
    }

    #[test]
    fn test_union() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::new(Point2::new(3.0, 3.0), Point2::new(10.0, 10.0));
        let u = a.union(b);

        assert_eq!(u.min, Point2::new(0.0, 0.0));
        assert_eq!(u.max, Point2::new(10.0, 10.0));
    }
}
