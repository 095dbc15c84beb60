//! Point types used throughout the crate.
//!
//! [`Point`] is the 2D floating-point workhorse of the geometry kernel.
//! [`PointI`] is its integer-lattice counterpart used by grid-aligned
//! silhouettes, and [`Point3`] carries a resolved placement position.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::precision;

/// A 2D point with floating-point coordinates.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A list of points.
pub type Points = Vec<Point>;

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared length of the vector from the origin to this point.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Length of the vector from the origin to this point.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the direction of this point.
    ///
    /// Returns the zero vector when the length is zero under the active
    /// epsilon.
    pub fn normalize(&self) -> Point {
        let len = self.length();
        if len <= precision::epsilon() {
            Point::zero()
        } else {
            Point::new(self.x / len, self.y / len)
        }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product with another vector.
    #[inline]
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector, rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perp(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Rotate around the origin by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate around `center` by `angle` radians.
    pub fn rotate_around(&self, center: &Point, angle: f64) -> Point {
        (*self - *center).rotate(angle) + *center
    }

    /// Coordinate-wise equality under the active epsilon.
    #[inline]
    pub fn approx_eq(&self, other: &Point) -> bool {
        precision::approx_eq(self.x, other.x) && precision::approx_eq(self.y, other.y)
    }

    /// Round to the nearest lattice point.
    #[inline]
    pub fn to_lattice(&self) -> PointI {
        PointI::new(self.x.round() as i64, self.y.round() as i64)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(self, factor: f64) -> Point {
        Point::new(self.x / factor, self.y / factor)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D point with integer lattice coordinates.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointI {
    pub x: i64,
    pub y: i64,
}

impl PointI {
    /// Create a new lattice point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Convert to a floating-point point.
    #[inline]
    pub fn to_point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl Add for PointI {
    type Output = PointI;

    #[inline]
    fn add(self, other: PointI) -> PointI {
        PointI::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for PointI {
    type Output = PointI;

    #[inline]
    fn sub(self, other: PointI) -> PointI {
        PointI::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for PointI {
    type Output = PointI;

    #[inline]
    fn neg(self) -> PointI {
        PointI::new(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for PointI {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        PointI::new(x, y)
    }
}

impl fmt::Debug for PointI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for PointI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 3D point, used for resolved placement positions.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new 3D point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Lift a 2D point to the plane at height `z`.
    #[inline]
    pub fn from_2d(p: Point, z: f64) -> Self {
        Self { x: p.x, y: p.y, z }
    }

    /// Project onto the XY plane.
    #[inline]
    pub fn to_2d(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Add for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_normalize() {
        let v = Point::new(3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert_eq!(Point::zero().normalize(), Point::zero());
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), 1.0);
        assert_eq!(b.cross(&a), -1.0);
    }

    #[test]
    fn test_perp_is_ccw() {
        let v = Point::new(1.0, 0.0);
        assert!(v.perp().approx_eq(&Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_rotate() {
        let p = Point::new(1.0, 0.0);
        assert!(p.rotate(PI / 2.0).approx_eq(&Point::new(0.0, 1.0)));
        assert!(p.rotate(PI).approx_eq(&Point::new(-1.0, 0.0)));
    }

    #[test]
    fn test_rotate_around() {
        let p = Point::new(2.0, 1.0);
        let c = Point::new(1.0, 1.0);
        assert!(p.rotate_around(&c, PI).approx_eq(&Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_lattice_round_trip() {
        let p = Point::new(2.6, -1.4);
        assert_eq!(p.to_lattice(), PointI::new(3, -1));
        assert_eq!(PointI::new(3, -1).to_point(), Point::new(3.0, -1.0));
    }

    #[test]
    fn test_lattice_arithmetic() {
        let a = PointI::new(5, 7);
        let b = PointI::new(2, -3);
        assert_eq!(a + b, PointI::new(7, 4));
        assert_eq!(a - b, PointI::new(3, 10));
        assert_eq!(-b, PointI::new(-2, 3));
    }

    #[test]
    fn test_point3_projection() {
        let p = Point3::from_2d(Point::new(1.0, 2.0), 3.0);
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p.to_2d(), Point::new(1.0, 2.0));
    }
}
