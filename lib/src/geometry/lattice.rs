//! Integer-lattice polygons.
//!
//! [`PolygonI`] mirrors the [`Polygon`] query contracts on grid-aligned
//! silhouettes. It shares one algorithm core with the float type: anything
//! beyond trivial lattice arithmetic converts through [`Polygon`] and
//! delegates, so no geometric algorithm exists twice. The one native
//! operation is Minkowski erosion, which placement grids use to find where
//! a silhouette still fits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clip;
use crate::geometry::{Point, PointI, Polygon, Region, Regions};

/// A closed polygon on the integer lattice.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolygonI {
    points: Vec<PointI>,
}

impl PolygonI {
    /// Create a new empty lattice polygon.
    #[inline]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a lattice polygon from points, collapsing consecutive
    /// duplicates (the wrap-around pair included).
    pub fn from_points(points: Vec<PointI>) -> Self {
        let mut deduped: Vec<PointI> = Vec::with_capacity(points.len());
        for p in points {
            if deduped.last() != Some(&p) {
                deduped.push(p);
            }
        }
        while deduped.len() > 1 && deduped.first() == deduped.last() {
            deduped.pop();
        }
        Self { points: deduped }
    }

    /// Get the points of this polygon.
    #[inline]
    pub fn points(&self) -> &[PointI] {
        &self.points
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The edges as point pairs, the closing edge included.
    pub fn edges(&self) -> Vec<(PointI, PointI)> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        (0..self.points.len())
            .map(|i| {
                (
                    self.points[i],
                    self.points[(i + 1) % self.points.len()],
                )
            })
            .collect()
    }

    /// Lattice bounds as (min, max) corners, `None` when empty.
    pub fn bounds(&self) -> Option<(PointI, PointI)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Translate the polygon by a lattice vector.
    pub fn translate(&mut self, v: PointI) {
        for p in &mut self.points {
            *p = *p + v;
        }
    }

    /// Return a translated copy of the polygon.
    pub fn translated(&self, v: PointI) -> Self {
        let mut result = self.clone();
        result.translate(v);
        result
    }

    /// Convert to a floating-point polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_points(self.points.iter().map(PointI::to_point).collect())
    }

    /// Build a lattice polygon by rounding a floating-point polygon's
    /// vertices; rounding collisions collapse.
    pub fn from_polygon(polygon: &Polygon) -> Self {
        Self::from_points(polygon.points().iter().map(Point::to_lattice).collect())
    }

    /// Check whether a lattice point lies inside the polygon.
    #[inline]
    pub fn contains(&self, p: &PointI) -> bool {
        self.to_polygon().contains(&p.to_point())
    }

    /// Unsigned area of the polygon.
    #[inline]
    pub fn area(&self) -> f64 {
        self.to_polygon().area()
    }

    /// Minkowski erosion of this polygon by a subtrahend.
    ///
    /// Translates the minuend by the negation of every subtrahend vertex
    /// and intersects all the candidates through the boolean layer. The
    /// result is the set of positions where the subtrahend's vertex set
    /// stays inside the minuend: zero or more disjoint polygons, empty when
    /// nothing fits.
    pub fn minkowski_minus(&self, subtrahend: &PolygonI) -> Vec<PolygonI> {
        let mut vertices = subtrahend.points.iter();
        let first = match vertices.next() {
            Some(v) => *v,
            None => return vec![self.clone()],
        };
        let mut acc: Regions = vec![Region::new(self.translated(-first).to_polygon())];
        for v in vertices {
            let candidate = vec![Region::new(self.translated(-*v).to_polygon())];
            acc = clip::intersection(&acc, &candidate);
            if acc.is_empty() {
                return Vec::new();
            }
        }
        acc.iter()
            .map(|region| PolygonI::from_polygon(&region.boundary))
            .filter(|poly| poly.len() >= 3)
            .collect()
    }
}

impl fmt::Debug for PolygonI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolygonI({} points)", self.points.len())
    }
}

impl fmt::Display for PolygonI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolygonI[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<PointI>> for PolygonI {
    fn from(points: Vec<PointI>) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice_rect(min: PointI, max: PointI) -> PolygonI {
        PolygonI::from_points(vec![
            min,
            PointI::new(max.x, min.y),
            max,
            PointI::new(min.x, max.y),
        ])
    }

    #[test]
    fn test_from_points_dedupes() {
        let poly = PolygonI::from_points(vec![
            PointI::new(0, 0),
            PointI::new(0, 0),
            PointI::new(4, 0),
            PointI::new(4, 4),
            PointI::new(0, 0),
        ]);
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_bounds_and_edges() {
        let poly = lattice_rect(PointI::new(-2, 1), PointI::new(3, 5));
        assert_eq!(poly.bounds(), Some((PointI::new(-2, 1), PointI::new(3, 5))));
        let edges = poly.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (PointI::new(-2, 5), PointI::new(-2, 1)));
        assert_eq!(PolygonI::new().bounds(), None);
    }

    #[test]
    fn test_contains_and_area_delegate() {
        let poly = lattice_rect(PointI::new(0, 0), PointI::new(10, 6));
        assert!(poly.contains(&PointI::new(5, 3)));
        assert!(!poly.contains(&PointI::new(11, 3)));
        assert!((poly.area() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_through_polygon() {
        let poly = lattice_rect(PointI::new(0, 0), PointI::new(4, 4));
        let round_tripped = PolygonI::from_polygon(&poly.to_polygon());
        assert_eq!(round_tripped, poly);
    }

    #[test]
    fn test_minkowski_single_point_translates() {
        let poly = lattice_rect(PointI::new(0, 0), PointI::new(6, 4));
        let single = PolygonI::from_points(vec![PointI::new(1, 1)]);
        let result = poly.minkowski_minus(&single);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].bounds(),
            Some((PointI::new(-1, -1), PointI::new(5, 3)))
        );
    }

    #[test]
    fn test_minkowski_empty_subtrahend_is_identity() {
        let poly = lattice_rect(PointI::new(0, 0), PointI::new(6, 4));
        let result = poly.minkowski_minus(&PolygonI::new());
        assert_eq!(result, vec![poly]);
    }

    #[test]
    fn test_minkowski_square_shrinks_rectangle() {
        let minuend = lattice_rect(PointI::new(0, 0), PointI::new(10, 6));
        let subtrahend = lattice_rect(PointI::new(0, 0), PointI::new(2, 2));
        let result = minuend.minkowski_minus(&subtrahend);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].bounds(),
            Some((PointI::new(0, 0), PointI::new(8, 4)))
        );
        assert!((result[0].area() - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_minkowski_nothing_fits() {
        let minuend = lattice_rect(PointI::new(0, 0), PointI::new(2, 2));
        let subtrahend = lattice_rect(PointI::new(0, 0), PointI::new(5, 5));
        assert!(minuend.minkowski_minus(&subtrahend).is_empty());
    }
}
