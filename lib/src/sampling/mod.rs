//! Random point sampling over triangulated areas.
//!
//! One shared sampling core for every caller: pick a triangle with
//! probability proportional to its area, then draw a point uniformly inside
//! it by barycentric folding. Randomness always comes from a caller-supplied
//! generator.

use rand::Rng;

use crate::geometry::{Point, Triangle};

/// Pick an index with probability proportional to the entries.
///
/// Scans the cumulative sums; the caller guarantees `total` is the positive
/// sum of `areas`.
fn pick_index<R: Rng>(areas: &[f64], total: f64, rng: &mut R) -> usize {
    let target = rng.gen::<f64>() * total;
    let mut accumulated = 0.0;
    for (index, area) in areas.iter().enumerate() {
        accumulated += area;
        if target < accumulated {
            return index;
        }
    }
    areas.len() - 1
}

/// Sample a point uniformly inside a triangle.
///
/// Two unit draws span the parallelogram of the triangle's edge vectors;
/// draws landing past the diagonal are folded back into the triangle.
fn point_in_triangle<R: Rng>(a: Point, b: Point, c: Point, rng: &mut R) -> Point {
    let mut u: f64 = rng.gen();
    let mut v: f64 = rng.gen();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    a + (b - a) * u + (c - a) * v
}

/// Sample a point uniformly distributed over a triangle set.
///
/// Triangle selection is area-weighted, so the point is uniform over the
/// union of the triangles. [`Triangle::area`] reports non-finite areas as
/// zero, so a corrupt triangle is never drawn. Returns `None` when the set
/// has no positive total area to sample from.
pub fn sample_triangles<R: Rng>(
    vertices: &[Point],
    triangles: &[Triangle],
    rng: &mut R,
) -> Option<Point> {
    let areas: Vec<f64> = triangles.iter().map(|t| t.area(vertices)).collect();
    let total: f64 = areas.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let triangle = triangles[pick_index(&areas, total, rng)];
    Some(point_in_triangle(
        vertices[triangle.a],
        vertices[triangle.b],
        vertices[triangle.c],
        rng,
    ))
}
