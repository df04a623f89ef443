//! Polygon boolean algebra and measurement.
//!
//! A narrow facade over the `geo` crate so the rest of the crate depends on
//! four operations rather than on `geo`'s trait surface.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use geo::{Area, BooleanOps, BoundingRect, MultiPolygon, Polygon};

/// Returns the region covered by both `a` and `b`.
#[inline]
pub fn intersection(a: &Polygon<f64>, b: &Polygon<f64>) -> MultiPolygon<f64> {
    a.intersection(b)
}

/// Returns the region covered by `a` but not by `b`.
#[inline]
pub fn difference(a: &Polygon<f64>, b: &Polygon<f64>) -> MultiPolygon<f64> {
    a.difference(b)
}

/// Returns the unsigned planar area of a polygon or multipolygon.
#[inline]
pub fn area<G: Area<f64>>(geometry: &G) -> f64 {
    geometry.unsigned_area()
}

/// Returns the bounding box of a polygon, or `None` if it has no vertices.
#[inline]
pub fn bounds(polygon: &Polygon<f64>) -> Option<Aabb2<f64>> {
    polygon.bounding_rect().map(Aabb2::from)
}

/// Returns `true` if every exterior and interior vertex is finite.
pub fn is_finite(polygon: &Polygon<f64>) -> bool {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.coords())
        .all(|&c| Point2::from(c).is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, polygon, LineString, Rect};

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Rect::new(coord! { x: x0, y: y0 }, coord! { x: x1, y: y1 }).to_polygon()
    }

    #[test]
    fn test_intersection_area_is_symmetric() {
        let a = square(0.0, 0.0, 10.0, 10.0);
        let b = polygon![(x: 4.0, y: -2.0), (x: 14.0, y: 3.0), (x: 6.0, y: 12.0)];

        let ab = area(&intersection(&a, &b));
        let ba = area(&intersection(&b, &a));
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_difference_conserves_area() {
        let a = square(0.0, 0.0, 10.0, 10.0);
        let b = square(5.0, 5.0, 15.0, 15.0);

        let inter = area(&intersection(&a, &b));
        let rest = area(&difference(&a, &b));
        assert!((inter - 25.0).abs() < 1e-6);
        assert!((rest - 75.0).abs() < 1e-6);
        assert!((inter + rest - area(&a)).abs() < 1e-6);
    }

    #[test]
    fn test_touching_squares_have_zero_overlap() {
        let a = square(0.0, 0.0, 10.0, 10.0);
        let b = square(10.0, 0.0, 20.0, 10.0);
        assert_eq!(area(&intersection(&a, &b)), 0.0);
    }

    #[test]
    fn test_bounds() {
        let p = polygon![(x: 1.0, y: 2.0), (x: -3.0, y: 5.0), (x: 4.0, y: -1.0)];
        let b = bounds(&p).unwrap();
        assert_eq!(b.min, Point2::new(-3.0, -1.0));
        assert_eq!(b.max, Point2::new(4.0, 5.0));

        let empty: Polygon<f64> = Polygon::new(LineString::new(vec![]), vec![]);
        assert!(bounds(&empty).is_none());
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&square(0.0, 0.0, 1.0, 1.0)));
        let bad = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 1.0), (x: 1.0, y: 0.0)];
        assert!(!is_finite(&bad));
    }
}
