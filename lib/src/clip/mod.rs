//! Boolean operations over regions.
//!
//! Union, difference and intersection of polygons-with-holes, delegating the
//! actual clipping to the geo-clipper library. This layer owns only the
//! marshaling and the winding discipline: inputs are rewound canonical
//! (counter-clockwise boundaries, clockwise holes) before conversion, and
//! every region coming back out is canonical again.

use geo::{Coord as GeoCoord, LineString, MultiPolygon, Polygon as GeoPolygon};
use geo_clipper::Clipper;

use crate::geometry::{Point, Polygon, Region, Regions};

/// Scaling factor applied by geo-clipper when converting coordinates to the
/// clipper's integer lattice.
const CLIP_FACTOR: f64 = 1_000_000.0;

/// A boolean operation over two region sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Everything covered by either set.
    Union,
    /// Everything in the subject not covered by the clip set.
    Difference,
    /// Everything covered by both sets.
    Intersection,
}

fn ring_to_geo(polygon: &Polygon) -> LineString<f64> {
    let mut coords: Vec<GeoCoord<f64>> = polygon
        .points()
        .iter()
        .map(|p| GeoCoord { x: p.x, y: p.y })
        .collect();
    // geo rings carry an explicit closing point.
    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(*first);
        }
    }
    LineString::new(coords)
}

fn region_to_geo(region: &Region) -> GeoPolygon<f64> {
    let mut canonical = region.clone();
    canonical.make_canonical();
    let holes = canonical.holes.iter().map(ring_to_geo).collect();
    GeoPolygon::new(ring_to_geo(&canonical.boundary), holes)
}

fn geo_to_ring(ring: &LineString<f64>) -> Polygon {
    let mut points: Vec<Point> = ring.coords().map(|c| Point::new(c.x, c.y)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Polygon::from_points(points)
}

fn geo_to_region(geo_poly: &GeoPolygon<f64>) -> Region {
    let boundary = geo_to_ring(geo_poly.exterior());
    let holes = geo_poly
        .interiors()
        .iter()
        .map(geo_to_ring)
        .filter(|hole| hole.len() >= 3)
        .collect();
    let mut region = Region::with_holes(boundary, holes);
    region.make_canonical();
    region
}

fn regions_to_geo_multi(regions: &[Region]) -> MultiPolygon<f64> {
    MultiPolygon::new(regions.iter().map(region_to_geo).collect())
}

fn geo_multi_to_regions(multi: &MultiPolygon<f64>) -> Regions {
    multi
        .0
        .iter()
        .map(geo_to_region)
        .filter(|region| region.boundary.len() >= 3)
        .collect()
}

fn canonical_copy(regions: &[Region]) -> Regions {
    regions
        .iter()
        .map(|region| {
            let mut copy = region.clone();
            copy.make_canonical();
            copy
        })
        .collect()
}

fn run(op: BooleanOp, subject: &[Region], clip_set: &[Region]) -> Regions {
    let subject_geo = regions_to_geo_multi(subject);
    let clip_geo = regions_to_geo_multi(clip_set);
    let result = match op {
        BooleanOp::Union => subject_geo.union(&clip_geo, CLIP_FACTOR),
        BooleanOp::Difference => subject_geo.difference(&clip_geo, CLIP_FACTOR),
        BooleanOp::Intersection => subject_geo.intersection(&clip_geo, CLIP_FACTOR),
    };
    geo_multi_to_regions(&result)
}

/// Apply a boolean operation to two region sets.
pub fn clip(op: BooleanOp, subject: &[Region], clip_set: &[Region]) -> Regions {
    match op {
        BooleanOp::Union => union(subject, clip_set),
        BooleanOp::Difference => difference(subject, clip_set),
        BooleanOp::Intersection => intersection(subject, clip_set),
    }
}

/// Compute the union of two region sets.
pub fn union(subject: &[Region], clip_set: &[Region]) -> Regions {
    if subject.is_empty() {
        return canonical_copy(clip_set);
    }
    if clip_set.is_empty() {
        return canonical_copy(subject);
    }
    run(BooleanOp::Union, subject, clip_set)
}

/// Compute the subject regions minus the clip regions.
pub fn difference(subject: &[Region], clip_set: &[Region]) -> Regions {
    if subject.is_empty() {
        return Vec::new();
    }
    if clip_set.is_empty() {
        return canonical_copy(subject);
    }
    run(BooleanOp::Difference, subject, clip_set)
}

/// Compute the intersection of two region sets.
pub fn intersection(subject: &[Region], clip_set: &[Region]) -> Regions {
    if subject.is_empty() || clip_set.is_empty() {
        return Vec::new();
    }
    run(BooleanOp::Intersection, subject, clip_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Region {
        Region::new(Polygon::rectangle(Point::new(min, min), Point::new(max, max)))
    }

    #[test]
    fn test_difference_with_self_is_empty() {
        let region = square(0.0, 4.0);
        let result = difference(&[region.clone()], &[region]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_difference_cuts_a_hole() {
        let outer = square(0.0, 4.0);
        let inner = square(1.0, 2.0);
        let result = difference(&[outer], &[inner]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hole_count(), 1);
        assert!((result[0].area() - 15.0).abs() < 1e-6);
        assert!(result[0].is_canonical());
    }

    #[test]
    fn test_difference_empty_clip_is_identity() {
        let region = square(0.0, 4.0);
        let result = difference(&[region.clone()], &[]);
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - region.area()).abs() < 1e-9);
    }

    #[test]
    fn test_union_merges_overlap() {
        let a = square(0.0, 4.0);
        let b = square(2.0, 6.0);
        let result = union(&[a], &[b]);
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 28.0).abs() < 1e-6);
        assert!(result[0].is_canonical());
    }

    #[test]
    fn test_union_keeps_disjoint_separate() {
        let a = square(0.0, 2.0);
        let b = square(5.0, 7.0);
        let result = union(&[a], &[b]);
        assert_eq!(result.len(), 2);
        let total: f64 = result.iter().map(Region::area).sum();
        assert!((total - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_pass_through_is_canonical() {
        let mut region = square(0.0, 3.0);
        region.boundary.make_clockwise();
        let result = union(&[], &[region]);
        assert_eq!(result.len(), 1);
        assert!(result[0].is_canonical());
    }

    #[test]
    fn test_intersection_of_overlap() {
        let a = square(0.0, 4.0);
        let b = square(2.0, 6.0);
        let result = intersection(&[a], &[b]);
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_of_disjoint_is_empty() {
        let a = square(0.0, 2.0);
        let b = square(5.0, 7.0);
        assert!(intersection(&[a], &[b]).is_empty());
    }

    #[test]
    fn test_clip_dispatch_matches_wrappers() {
        let a = square(0.0, 4.0);
        let b = square(2.0, 6.0);
        assert_eq!(
            clip(BooleanOp::Union, &[a.clone()], &[b.clone()]),
            union(&[a.clone()], &[b.clone()])
        );
        assert_eq!(
            clip(BooleanOp::Difference, &[a.clone()], &[b.clone()]),
            difference(&[a.clone()], &[b.clone()])
        );
        assert_eq!(
            clip(BooleanOp::Intersection, &[a.clone()], &[b.clone()]),
            intersection(&[a], &[b])
        );
    }

    #[test]
    fn test_difference_respects_input_winding() {
        // A clockwise subject must clip the same as its canonical form.
        let mut cw = square(0.0, 4.0);
        cw.boundary.make_clockwise();
        let inner = square(1.0, 2.0);
        let result = difference(&[cw], &[inner]);
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 15.0).abs() < 1e-6);
    }
}
