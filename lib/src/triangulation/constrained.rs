//! Constrained triangulation of closed contours.
//!
//! The actual decomposition is delegated to the `earcutr` ear-clipping
//! collaborator. This module only marshals rings into its flat coordinate
//! format (holes flagged by their first vertex index) and converts the index
//! triples coming back into [`Triangle`] values. Degenerate input yields an
//! empty set; collaborator failures propagate unreinterpreted.

use crate::geometry::{Point, Points, Region, Triangle};

use super::{TriangulationError, TriangulationResult};

fn append_ring(coords: &mut Vec<f64>, vertices: &mut Points, ring: &[Point]) {
    for point in ring {
        coords.push(point.x);
        coords.push(point.y);
        vertices.push(*point);
    }
}

fn triangles_from_indices(indices: &[usize]) -> Vec<Triangle> {
    indices
        .chunks_exact(3)
        .map(|triple| Triangle::new(triple[0], triple[1], triple[2]))
        .collect()
}

/// Triangulate a single closed ring without holes.
///
/// Triangle indices refer to the input slice. Fewer than three points
/// triangulates to nothing.
pub fn triangulate_ring(points: &[Point]) -> TriangulationResult<Vec<Triangle>> {
    if points.len() < 3 {
        return Ok(Vec::new());
    }
    let mut coords = Vec::with_capacity(points.len() * 2);
    for point in points {
        coords.push(point.x);
        coords.push(point.y);
    }
    let hole_starts: Vec<usize> = Vec::new();
    let indices = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(TriangulationError::Collaborator)?;
    Ok(triangles_from_indices(&indices))
}

/// Triangulate a region, holes carved out.
///
/// Returns the flattened vertex list (boundary first, then each hole in
/// order) together with triangles indexing into it. A degenerate boundary
/// triangulates to nothing; degenerate holes are ignored.
pub fn triangulate_region(region: &Region) -> TriangulationResult<(Points, Vec<Triangle>)> {
    if region.boundary.len() < 3 {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut vertices: Points = Vec::new();
    let mut coords: Vec<f64> = Vec::new();
    let mut hole_starts: Vec<usize> = Vec::new();

    append_ring(&mut coords, &mut vertices, region.boundary.points());
    for hole in &region.holes {
        if hole.len() < 3 {
            continue;
        }
        hole_starts.push(vertices.len());
        append_ring(&mut coords, &mut vertices, hole.points());
    }

    let indices = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(TriangulationError::Collaborator)?;
    Ok((vertices, triangles_from_indices(&indices)))
}
