//! Incremental Delaunay triangulation.
//!
//! Bowyer-Watson insertion: seed the working set with a super-triangle
//! enclosing every input point, insert the points one at a time by removing
//! all triangles whose circumcircle contains the new point and re-linking the
//! cavity boundary to it, then drop everything still attached to the
//! super-triangle.

use crate::geometry::{BoundingBox, Point, Triangle};
use crate::precision::{approx_zero, epsilon};

use super::{TriangulationError, TriangulationResult};

/// Circumcircle of a triangle, kept as center plus squared radius.
#[derive(Debug, Clone, Copy)]
struct Circumcircle {
    center: Point,
    radius_squared: f64,
}

impl Circumcircle {
    /// Whether a point lies inside or on the circle.
    fn contains(&self, point: &Point) -> bool {
        self.center.distance_squared(point) <= self.radius_squared + epsilon()
    }
}

/// Circumcircle through three points, `None` when they are collinear.
///
/// The center is the intersection of two perpendicular bisectors. When an
/// edge is horizontal its bisector is vertical and has no slope, so the
/// computation switches to the other two bisectors.
fn circumcircle(a: Point, b: Point, c: Point) -> Option<Circumcircle> {
    let ab_horizontal = approx_zero(b.y - a.y);
    let bc_horizontal = approx_zero(c.y - b.y);
    if ab_horizontal && bc_horizontal {
        return None;
    }

    let mid_ab = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let mid_bc = Point::new((b.x + c.x) / 2.0, (b.y + c.y) / 2.0);

    let center = if ab_horizontal {
        let slope_bc = -(c.x - b.x) / (c.y - b.y);
        let x = mid_ab.x;
        Point::new(x, slope_bc * (x - mid_bc.x) + mid_bc.y)
    } else if bc_horizontal {
        let slope_ab = -(b.x - a.x) / (b.y - a.y);
        let x = mid_bc.x;
        Point::new(x, slope_ab * (x - mid_ab.x) + mid_ab.y)
    } else {
        let slope_ab = -(b.x - a.x) / (b.y - a.y);
        let slope_bc = -(c.x - b.x) / (c.y - b.y);
        if approx_zero(slope_ab - slope_bc) {
            return None;
        }
        let x = (slope_ab * mid_ab.x - slope_bc * mid_bc.x + mid_bc.y - mid_ab.y)
            / (slope_ab - slope_bc);
        Point::new(x, slope_ab * (x - mid_ab.x) + mid_ab.y)
    };

    Some(Circumcircle {
        center,
        radius_squared: center.distance_squared(&b),
    })
}

/// Remove every edge that occurs again with opposite winding.
///
/// Such pairs are exactly the interior edges shared by two removed
/// triangles; only the cavity boundary survives.
fn cancel_shared_edges(edges: &mut Vec<(usize, usize)>) {
    let mut index = 0;
    while index < edges.len() {
        let (from, to) = edges[index];
        match edges[index + 1..]
            .iter()
            .position(|&(f, t)| f == to && t == from)
        {
            Some(offset) => {
                edges.remove(index + 1 + offset);
                edges.remove(index);
            }
            None => index += 1,
        }
    }
}

/// Triangulate a point set with the Bowyer-Watson incremental algorithm.
///
/// Returns the input points unchanged together with triangles indexing into
/// them. Every output triangle satisfies the empty-circumcircle property
/// over the output vertices. Fewer than three input points is a
/// [`TriangulationError::DegenerateInput`].
pub fn delaunay(points: &[Point]) -> TriangulationResult<(Vec<Point>, Vec<Triangle>)> {
    if points.len() < 3 {
        return Err(TriangulationError::DegenerateInput {
            needed: 3,
            got: points.len(),
        });
    }

    let bbox = BoundingBox::from_points(points);
    let center = bbox.center();
    // Inflate by twice the largest extent so the super-triangle encloses the
    // whole point set with room to spare. The lower bound keeps it finite
    // when every point coincides.
    let dmax = bbox.width().max(bbox.height()).max(1.0);

    let mut vertices: Vec<Point> = points.to_vec();
    let super_base = vertices.len();
    vertices.push(Point::new(center.x - 2.0 * dmax, center.y - dmax));
    vertices.push(Point::new(center.x, center.y + 2.0 * dmax));
    vertices.push(Point::new(center.x + 2.0 * dmax, center.y - dmax));

    let mut triangles = vec![Triangle::new(super_base, super_base + 1, super_base + 2)];

    for index in 0..super_base {
        let point = vertices[index];
        let mut cavity: Vec<(usize, usize)> = Vec::new();
        let mut kept: Vec<Triangle> = Vec::with_capacity(triangles.len() + 2);

        for triangle in &triangles {
            let circle = circumcircle(
                vertices[triangle.a],
                vertices[triangle.b],
                vertices[triangle.c],
            );
            match circle {
                Some(circle) if circle.contains(&point) => {
                    cavity.push((triangle.a, triangle.b));
                    cavity.push((triangle.b, triangle.c));
                    cavity.push((triangle.c, triangle.a));
                }
                _ => kept.push(*triangle),
            }
        }

        cancel_shared_edges(&mut cavity);
        for (from, to) in cavity {
            kept.push(Triangle::new(from, to, index));
        }
        triangles = kept;
    }

    triangles.retain(|triangle| {
        triangle.a < super_base && triangle.b < super_base && triangle.c < super_base
    });
    vertices.truncate(super_base);
    Ok((vertices, triangles))
}
