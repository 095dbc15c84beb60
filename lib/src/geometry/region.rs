//! Polygons with holes.
//!
//! A [`Region`] is one outer boundary plus zero or more hole contours. The
//! boolean layer consumes and produces regions; its results are always
//! canonical (counter-clockwise boundary, clockwise holes). Holes are
//! assumed to lie inside the boundary; that containment is not enforced
//! here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Point, Polygon};

/// A polygon with holes.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// The outer boundary.
    pub boundary: Polygon,
    /// Interior hole contours.
    pub holes: Vec<Polygon>,
}

/// A collection of regions.
pub type Regions = Vec<Region>;

impl Region {
    /// Create a region with only a boundary and no holes.
    #[inline]
    pub fn new(boundary: Polygon) -> Self {
        Self {
            boundary,
            holes: Vec::new(),
        }
    }

    /// Create a region with a boundary and holes.
    #[inline]
    pub fn with_holes(boundary: Polygon, holes: Vec<Polygon>) -> Self {
        Self { boundary, holes }
    }

    /// Check if the region has no boundary points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Get the number of holes.
    #[inline]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Check if this region has any holes.
    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Add a hole to the region.
    #[inline]
    pub fn add_hole(&mut self, hole: Polygon) {
        self.holes.push(hole);
    }

    /// Area of the region: boundary area minus hole areas.
    pub fn area(&self) -> f64 {
        let hole_area: f64 = self.holes.iter().map(|h| h.area()).sum();
        self.boundary.area() - hole_area
    }

    /// Total perimeter over boundary and holes.
    pub fn perimeter(&self) -> f64 {
        let hole_perimeter: f64 = self.holes.iter().map(|h| h.perimeter()).sum();
        self.boundary.perimeter() + hole_perimeter
    }

    /// The boundary's bounding box.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.boundary.bounding_box()
    }

    /// Check whether a point lies inside the boundary and outside every
    /// hole.
    pub fn contains(&self, p: &Point) -> bool {
        if !self.boundary.contains(p) {
            return false;
        }
        for hole in &self.holes {
            if hole.contains(p) {
                return false;
            }
        }
        true
    }

    /// Rewind the boundary counter-clockwise and every hole clockwise.
    pub fn make_canonical(&mut self) {
        self.boundary.make_counter_clockwise();
        for hole in &mut self.holes {
            hole.make_clockwise();
        }
    }

    /// Whether the boundary is counter-clockwise and every hole clockwise.
    pub fn is_canonical(&self) -> bool {
        if !self.boundary.is_counter_clockwise() {
            return false;
        }
        self.holes.iter().all(|hole| hole.is_clockwise())
    }

    /// Translate the region by a vector.
    pub fn translate(&mut self, v: Point) {
        self.boundary.translate(v);
        for hole in &mut self.holes {
            hole.translate(v);
        }
    }

    /// Return a translated copy of the region.
    pub fn translated(&self, v: Point) -> Self {
        let mut result = self.clone();
        result.translate(v);
        result
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region(boundary: {} points, {} holes)",
            self.boundary.len(),
            self.holes.len()
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region[boundary: {}", self.boundary)?;
        for (i, hole) in self.holes.iter().enumerate() {
            write!(f, ", hole{}: {}", i, hole)?;
        }
        write!(f, "]")
    }
}

impl From<Polygon> for Region {
    fn from(polygon: Polygon) -> Self {
        Self::new(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_hole() -> Region {
        let boundary = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let mut hole = Polygon::rectangle(Point::new(2.5, 2.5), Point::new(7.5, 7.5));
        hole.make_clockwise();
        Region::with_holes(boundary, vec![hole])
    }

    #[test]
    fn test_region_without_holes() {
        let region = Region::new(Polygon::rectangle(Point::new(0.0, 0.0), Point::new(4.0, 4.0)));
        assert!(!region.is_empty());
        assert!(!region.has_holes());
        assert_eq!(region.hole_count(), 0);
        assert!((region.area() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_subtracts_holes() {
        let region = square_with_hole();
        assert!((region.area() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_perimeter_adds_holes() {
        let region = square_with_hole();
        assert!((region.perimeter() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_respects_holes() {
        let region = square_with_hole();
        assert!(region.contains(&Point::new(1.0, 1.0)));
        assert!(region.contains(&Point::new(9.0, 9.0)));
        assert!(!region.contains(&Point::new(5.0, 5.0)));
        assert!(!region.contains(&Point::new(-1.0, 5.0)));
    }

    #[test]
    fn test_bounding_box_is_boundary_box() {
        let region = square_with_hole();
        let bb = region.bounding_box();
        assert_eq!(bb.min, Point::new(0.0, 0.0));
        assert_eq!(bb.max, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_make_canonical() {
        let boundary = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).reversed();
        let hole = Polygon::rectangle(Point::new(2.0, 2.0), Point::new(4.0, 4.0));
        let mut region = Region::with_holes(boundary, vec![hole]);
        assert!(!region.is_canonical());
        region.make_canonical();
        assert!(region.is_canonical());
        assert!(region.boundary.is_counter_clockwise());
        assert!(region.holes[0].is_clockwise());
    }

    #[test]
    fn test_translate() {
        let region = square_with_hole().translated(Point::new(5.0, -5.0));
        assert!(region.contains(&Point::new(6.0, -4.0)));
        assert!(!region.contains(&Point::new(10.0, 0.0)));
        assert_eq!(region.bounding_box().min, Point::new(5.0, -5.0));
    }

    #[test]
    fn test_from_polygon() {
        let region: Region = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(2.0, 2.0)).into();
        assert!(!region.has_holes());
        assert!((region.area() - 4.0).abs() < 1e-9);
    }
}
