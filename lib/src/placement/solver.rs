//! Placement solver orchestration.
//!
//! Pure functions over caller-supplied state: reduce the floor by occupied
//! footprints, sample a candidate point from what remains and lift it to the
//! floor height, or rank placed objects for decoration. No candidate search
//! and no iterative energy minimization happens here.

use rand::Rng;

use crate::clip;
use crate::geometry::{Point, Point3, Polygon, Region, Regions, Triangle};
use crate::sampling;
use crate::triangulation::constrained;

use super::metrics::{score_instances, DEFAULT_METRIC_KINDS};
use super::{Footprint, ObjectId, PlacedObject, PlacementError, PlacementResult};

/// Subtract every occupied footprint from the floor polygon.
///
/// Differences apply in input order and short-circuit to an empty result as
/// soon as nothing is left.
pub fn reduce_free_area(floor: &Polygon, occupied: &[Footprint]) -> Regions {
    let mut free: Regions = vec![Region::new(floor.clone())];
    for footprint in occupied {
        free = clip::difference(&free, &[Region::new(footprint.clone())]);
        if free.is_empty() {
            return free;
        }
    }
    free
}

/// Sample a point uniformly distributed over the free area.
///
/// Every region is triangulated and the draw runs over the merged triangle
/// set with area-weighted selection, so the candidate point is uniform over
/// the whole free area no matter how it is split into regions. Zero
/// triangles overall means there is nothing to place on.
pub fn sample_free_point<R: Rng>(free: &[Region], rng: &mut R) -> PlacementResult<Point> {
    let mut vertices: Vec<Point> = Vec::new();
    let mut triangles: Vec<Triangle> = Vec::new();
    for region in free {
        let (region_vertices, region_triangles) = constrained::triangulate_region(region)?;
        let base = vertices.len();
        vertices.extend(region_vertices);
        triangles.extend(
            region_triangles
                .into_iter()
                .map(|t| Triangle::new(t.a + base, t.b + base, t.c + base)),
        );
    }
    sampling::sample_triangles(&vertices, &triangles, rng).ok_or(PlacementError::NoSpaceAvailable)
}

/// Propose a position for a new object on the floor.
///
/// Reduces the floor by the occupied footprints, samples a candidate point
/// from the remainder and lifts it to the caller-supplied floor height.
pub fn possible_location<R: Rng>(
    floor: &Polygon,
    floor_z: f64,
    occupied: &[Footprint],
    rng: &mut R,
) -> PlacementResult<Point3> {
    let free = reduce_free_area(floor, occupied);
    if free.is_empty() {
        return Err(PlacementError::NoSpaceAvailable);
    }
    let point = sample_free_point(&free, rng)?;
    Ok(Point3::from_2d(point, floor_z))
}

/// Order placed objects for decoration.
///
/// Each object is scored by the arithmetic mean of its metric values and the
/// ids come back sorted ascending. Equal scores fall back to id order, so
/// the result is deterministic.
pub fn decoration_order(objects: &[PlacedObject]) -> Vec<ObjectId> {
    let mut scored = score_instances(objects, DEFAULT_METRIC_KINDS);
    scored.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    scored.into_iter().map(|instance| instance.id).collect()
}
