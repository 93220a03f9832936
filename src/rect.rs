//! Axis-aligned rectangles.
//!
//! Used for the bounding boxes derived from landmark positions.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle.
///
/// Stored as its top-left and bottom-right corners, so a rectangle built from
/// a set of points via [`Rect::bounding`] keeps the exact extrema of those
/// points; center and size are derived. Rectangles are allowed to have zero
/// height and/or width. Negative dimensions are not allowed.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect {
    min: Point2<f32>,
    max: Point2<f32>,
}

impl Rect {
    /// Creates a rectangle extending outwards from a center point.
    #[inline]
    pub fn from_center(x_center: f32, y_center: f32, width: f32, height: f32) -> Self {
        let center = Point2::new(x_center, y_center);
        let half = Vector2::new(width, height) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Creates a rectangle extending downwards and right from a point.
    #[inline]
    pub fn from_top_left(top_left_x: f32, top_left_y: f32, width: f32, height: f32) -> Self {
        let min = Point2::new(top_left_x, top_left_y);
        Self {
            min,
            max: min + Vector2::new(width, height),
        }
    }

    /// Computes the (axis-aligned) bounding rectangle that encompasses `points`.
    ///
    /// Every input point is contained in the result: the coordinate extrema are
    /// stored unchanged, without any arithmetic that could round them.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = T>, T: Into<Point2<f32>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();

        let first: Point2<f32> = iter.next()?.into();
        let (mut min, mut max) = (first.coords, first.coords);

        for pt in iter {
            let pt = pt.into();
            min = min.inf(&pt.coords);
            max = max.sup(&pt.coords);
        }

        Some(Self::span_inner(min.x, min.y, max.x, max.y))
    }

    fn span_inner(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        assert!(x_min <= x_max, "x_min={}, x_max={}", x_min, x_max);
        assert!(y_min <= y_max, "y_min={}, y_max={}", y_min, y_max);
        Self {
            min: Point2::new(x_min, y_min),
            max: Point2::new(x_max, y_max),
        }
    }

    #[inline]
    pub fn top_left(&self) -> Point2<f32> {
        self.min
    }

    #[inline]
    pub fn bottom_right(&self) -> Point2<f32> {
        self.max
    }

    /// Returns the X coordinate of the left side of the rectangle.
    #[inline]
    pub fn x(&self) -> f32 {
        self.min.x
    }

    /// Returns the Y coordinate of the top side of the rectangle.
    #[inline]
    pub fn y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        self.max - self.min
    }

    pub fn contains_point(&self, point: impl Into<Point2<f32>>) -> bool {
        let p: Point2<f32> = point.into();
        self.min.x <= p.x && self.min.y <= p.y && self.max.x >= p.x && self.max.y >= p.y
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.center();
        write!(
            f,
            "Rect @ ({},{})/{}x{}",
            center.x,
            center.y,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let rect = Rect::from_top_left(-5.0, 5.0, 10.0, 5.0);
        assert!(rect.contains_point([-5.0, 5.0]));
        assert!(rect.contains_point([-5.0 + 9.0, 5.0 + 4.0]));
        assert!(!rect.contains_point([-5.0 + 11.0, 5.0 + 4.0]));
        assert!(!rect.contains_point([-5.0 + 9.0, 5.0 + 5.0 + 1.0]));

        let empty = Rect::from_center(0.0, 0.0, 0.0, 0.0);
        assert!(!empty.contains_point([0.0025, 0.0]));
        assert!(!empty.contains_point([0.0, 1.0]));
        assert!(!empty.contains_point([0.0, -1.0]));
    }

    #[test]
    fn test_bounding() {
        assert!(Rect::bounding::<_, Point2<f32>>([]).is_none());

        assert_eq!(
            Rect::bounding([[0.0, 0.0], [1.0, 1.0], [-1.0, -1.0]]).unwrap(),
            Rect::from_center(0.0, 0.0, 2.0, 2.0),
        );
        assert_eq!(
            Rect::bounding([[1.0, 1.0], [-1.0, -1.0]]).unwrap(),
            Rect::from_center(0.0, 0.0, 2.0, 2.0),
        );
        assert_eq!(
            Rect::bounding([[-1.0, -1.0], [1.0, 1.0]]).unwrap(),
            Rect::from_center(0.0, 0.0, 2.0, 2.0),
        );
        assert_eq!(
            Rect::bounding([[1.0, 1.0], [2.0, 2.0]]).unwrap(),
            Rect::from_center(1.5, 1.5, 1.0, 1.0),
        );
        assert_eq!(
            Rect::bounding([[0.0, 0.0], [10.0, 0.0]]).unwrap(),
            Rect::from_center(5.0, 0.0, 10.0, 0.0),
        );
    }

    #[test]
    fn test_bounding_preserves_extrema_exactly() {
        // Coordinates with enough fractional digits that deriving the corners
        // from center and size would shift them by a ULP and evict the extreme
        // points from the rectangle.
        let points = [
            [27.605556, 463.65176],
            [637.3324, 0.74277866],
            [265.22903, 233.70314],
        ];
        let rect = Rect::bounding(points).unwrap();
        assert_eq!(rect.top_left(), Point2::new(27.605556, 0.74277866));
        assert_eq!(rect.bottom_right(), Point2::new(637.3324, 463.65176));
        for point in points {
            assert!(
                rect.contains_point(point),
                "{rect:?} does not contain {point:?}"
            );
        }
    }

    #[test]
    fn test_geom_zero() {
        let zero = Rect::from_center(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.area(), 0.0);

        let also_zero = Rect::from_center(1.0, 0.0, 0.0, 0.0);
        assert_eq!(also_zero.area(), 0.0);
    }

    #[test]
    fn test_corners() {
        let rect = Rect::from_center(1.0, 1.0, 4.0, 2.0);
        assert_eq!(rect.top_left(), Point2::new(-1.0, 0.0));
        assert_eq!(rect.bottom_right(), Point2::new(3.0, 2.0));
    }
}
