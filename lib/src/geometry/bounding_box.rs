//! Axis-aligned bounding boxes.
//!
//! A [`BoundingBox`] starts undefined and becomes defined once a point is
//! merged into it. Width, height and area of an undefined box are zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A 2D axis-aligned bounding box.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
    defined: bool,
}

impl BoundingBox {
    /// Create a new empty (undefined) bounding box.
    #[inline]
    pub fn new() -> Self {
        Self {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
            defined: false,
        }
    }

    /// Create a bounding box from min and max corners.
    #[inline]
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self {
            min,
            max,
            defined: true,
        }
    }

    /// Create a bounding box covering a slice of points.
    pub fn from_points(points: &[Point]) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(*p);
        }
        bb
    }

    /// Whether at least one point has been merged.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Whether no point has been merged yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.defined
    }

    /// Grow the box to cover `p`.
    pub fn merge_point(&mut self, p: Point) {
        if self.defined {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        } else {
            self.min = p;
            self.max = p;
            self.defined = true;
        }
    }

    /// Grow the box to cover another box.
    pub fn merge(&mut self, other: &BoundingBox) {
        if other.defined {
            self.merge_point(other.min);
            self.merge_point(other.max);
        }
    }

    /// Width of the box, zero when undefined.
    #[inline]
    pub fn width(&self) -> f64 {
        if self.defined {
            self.max.x - self.min.x
        } else {
            0.0
        }
    }

    /// Height of the box, zero when undefined.
    #[inline]
    pub fn height(&self) -> f64 {
        if self.defined {
            self.max.y - self.min.y
        } else {
            0.0
        }
    }

    /// Size as a point (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Area of the box.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Length of the corner-to-corner diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        if self.defined {
            self.min.distance(&self.max)
        } else {
            0.0
        }
    }

    /// Whether `p` lies inside the box, boundary included.
    #[inline]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.defined
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }

    /// Whether this box overlaps another.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.defined
            && other.defined
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Grow the box by `margin` on all sides.
    pub fn expand(&mut self, margin: f64) {
        if self.defined {
            self.min.x -= margin;
            self.min.y -= margin;
            self.max.x += margin;
            self.max.y += margin;
        }
    }

    /// Return a copy grown by `margin` on all sides.
    pub fn expanded(&self, margin: f64) -> Self {
        let mut result = *self;
        result.expand(margin);
        result
    }

    /// Shift the box by a vector.
    pub fn translate(&mut self, v: Point) {
        if self.defined {
            self.min = self.min + v;
            self.max = self.max + v;
        }
    }

    /// The four corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }
}

impl fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(f, "BoundingBox({:?} - {:?})", self.min, self.max)
        } else {
            write!(f, "BoundingBox(undefined)")
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(
                f,
                "[({:.6}, {:.6}) - ({:.6}, {:.6})]",
                self.min.x, self.min.y, self.max.x, self.max.y
            )
        } else {
            write!(f, "[undefined]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_undefined() {
        let bb = BoundingBox::new();
        assert!(!bb.is_defined());
        assert!(bb.is_empty());
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
        assert_eq!(bb.diagonal(), 0.0);
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point::new(1.0, 2.0),
            Point::new(5.0, 3.0),
            Point::new(3.0, 10.0),
        ];
        let bb = BoundingBox::from_points(&points);
        assert!(bb.is_defined());
        assert_eq!(bb.min, Point::new(1.0, 2.0));
        assert_eq!(bb.max, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_size_and_area() {
        let bb = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert_eq!(bb.width(), 10.0);
        assert_eq!(bb.height(), 5.0);
        assert_eq!(bb.area(), 50.0);
        assert_eq!(bb.center(), Point::new(5.0, 2.5));
    }

    #[test]
    fn test_diagonal() {
        let bb = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(bb.diagonal(), 5.0);
    }

    #[test]
    fn test_contains_point() {
        let bb = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(bb.contains_point(&Point::new(5.0, 5.0)));
        assert!(bb.contains_point(&Point::new(0.0, 0.0)));
        assert!(bb.contains_point(&Point::new(10.0, 10.0)));
        assert!(!bb.contains_point(&Point::new(-0.1, 5.0)));
        assert!(!bb.contains_point(&Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = BoundingBox::from_min_max(Point::new(5.0, 5.0), Point::new(15.0, 15.0));
        let c = BoundingBox::from_min_max(Point::new(20.0, 20.0), Point::new(30.0, 30.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_merge() {
        let mut a = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
        let b = BoundingBox::from_min_max(Point::new(2.0, 2.0), Point::new(10.0, 10.0));
        a.merge(&b);
        assert_eq!(a.min, Point::new(0.0, 0.0));
        assert_eq!(a.max, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_expand_and_translate() {
        let mut bb = BoundingBox::from_min_max(Point::new(1.0, 1.0), Point::new(9.0, 9.0));
        bb.expand(1.0);
        assert_eq!(bb.min, Point::new(0.0, 0.0));
        assert_eq!(bb.max, Point::new(10.0, 10.0));
        bb.translate(Point::new(2.0, 3.0));
        assert_eq!(bb.min, Point::new(2.0, 3.0));
        assert_eq!(bb.max, Point::new(12.0, 13.0));
    }

    #[test]
    fn test_corners() {
        let bb = BoundingBox::from_min_max(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
        let corners = bb.corners();
        assert_eq!(corners[0], Point::new(0.0, 0.0));
        assert_eq!(corners[1], Point::new(4.0, 0.0));
        assert_eq!(corners[2], Point::new(4.0, 2.0));
        assert_eq!(corners[3], Point::new(0.0, 2.0));
    }
}
