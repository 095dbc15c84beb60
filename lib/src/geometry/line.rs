//! Line segments and infinite-line interpretation.
//!
//! A [`Line`] always stores two endpoints. Operations that cut or probe
//! polygons take an additional [`LineKind`] so the same value can act as a
//! bounded segment or as the carrier of an infinite line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::precision;

/// How a [`Line`] is interpreted by cutting and intersection operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Bounded by the two endpoints.
    Segment,
    /// The infinite line through the two endpoints.
    Infinite,
}

/// A directed line from `a` to `b`.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

/// A list of lines.
pub type Lines = Vec<Line>;

impl Line {
    /// Create a new line from `a` to `b`.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The vector from `a` to `b`.
    #[inline]
    pub fn delta(&self) -> Point {
        self.b - self.a
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    /// Squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(&self.b)
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }

    /// Point at parameter `t`, where `t = 0` is `a` and `t = 1` is `b`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.a + self.delta() * t
    }

    /// Parameter of the projection of `p` onto the carrier line.
    ///
    /// Returns `0.0` for a degenerate line whose endpoints coincide.
    pub fn param_of(&self, p: &Point) -> f64 {
        let d = self.delta();
        let len_sq = d.length_squared();
        if len_sq <= precision::epsilon() {
            0.0
        } else {
            (*p - self.a).dot(&d) / len_sq
        }
    }

    /// Closest point on the segment to `p`.
    pub fn project_point(&self, p: &Point) -> Point {
        let t = self.param_of(p).clamp(0.0, 1.0);
        self.point_at(t)
    }

    /// Distance from `p` to the segment.
    #[inline]
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        self.project_point(p).distance(p)
    }

    /// Whether `p` lies on the segment under the active epsilon.
    #[inline]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.distance_to_point(p) <= precision::epsilon()
    }

    /// Intersection parameters with another line's carrier.
    ///
    /// Returns `(t, u)` such that `self.point_at(t) == other.point_at(u)`,
    /// or `None` when the carriers are parallel under the active epsilon.
    pub fn intersection_params(&self, other: &Line) -> Option<(f64, f64)> {
        let d1 = self.delta();
        let d2 = other.delta();
        let denom = d1.cross(&d2);
        if precision::approx_zero(denom) {
            return None;
        }
        let w = other.a - self.a;
        let t = w.cross(&d2) / denom;
        let u = w.cross(&d1) / denom;
        Some((t, u))
    }

    /// Intersection point with another line, honoring each side's kind.
    ///
    /// A [`LineKind::Segment`] side only accepts parameters inside `[0, 1]`
    /// (widened by the active epsilon); an [`LineKind::Infinite`] side
    /// accepts any parameter. Parallel carriers yield `None`.
    pub fn intersect(
        &self,
        self_kind: LineKind,
        other: &Line,
        other_kind: LineKind,
    ) -> Option<Point> {
        let (t, u) = self.intersection_params(other)?;
        let eps = precision::epsilon();
        if self_kind == LineKind::Segment && !(-eps..=1.0 + eps).contains(&t) {
            return None;
        }
        if other_kind == LineKind::Segment && !(-eps..=1.0 + eps).contains(&u) {
            return None;
        }
        Some(self.point_at(t))
    }

    /// Segment-segment intersection point, if any.
    #[inline]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        self.intersect(LineKind::Segment, other, LineKind::Segment)
    }

    /// The same line with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Line {
        Line::new(self.b, self.a)
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.a, self.b)
    }
}
