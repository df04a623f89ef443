//! 2D point type.

use geo::{Coord, CoordNum};
use num_traits::Float;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float + CoordNum> From<Coord<F>> for Point2<F> {
    #[inline]
    fn from(c: Coord<F>) -> Self {
        Self::new(c.x, c.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0_f64, 0.0).midpoint(Point2::new(4.0, -2.0));
        assert_eq!(m, Point2::new(2.0, -1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, 2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_from_coord() {
        let p: Point2<f64> = Coord { x: 3.0, y: 4.0 }.into();
        assert_eq!(p, Point2::new(3.0, 4.0));
    }
}
