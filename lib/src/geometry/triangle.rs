//! Index triangles over an external vertex list.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A triangle referencing three vertices by index.
///
/// The vertex list lives alongside the triangle set; the same list is shared
/// by every triangle produced from one triangulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Create a triangle from three vertex indices.
    #[inline]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three vertex indices in order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges in winding order.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Whether the triangle references vertex `index`.
    #[inline]
    pub fn has_vertex(&self, index: usize) -> bool {
        self.a == index || self.b == index || self.c == index
    }

    /// Whether the triangle shares the undirected edge `(i, j)`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.edges()
            .iter()
            .any(|&(a, b)| (a == i && b == j) || (a == j && b == i))
    }

    /// Unsigned area over the given vertex list.
    ///
    /// A non-finite result (indices hitting degenerate coordinates) is
    /// reported as zero so that area-weighted sampling stays well defined.
    pub fn area(&self, vertices: &[Point]) -> f64 {
        let a = vertices[self.a];
        let b = vertices[self.b];
        let c = vertices[self.c];
        let doubled = (b - a).cross(&(c - a));
        if doubled.is_finite() {
            doubled.abs() / 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_vertices() {
        let t = Triangle::new(0, 1, 2);
        assert_eq!(t.vertices(), [0, 1, 2]);
        assert_eq!(t.edges(), [(0, 1), (1, 2), (2, 0)]);
        assert!(t.has_vertex(1));
        assert!(!t.has_vertex(3));
    }

    #[test]
    fn test_has_edge_ignores_direction() {
        let t = Triangle::new(4, 7, 9);
        assert!(t.has_edge(7, 4));
        assert!(t.has_edge(9, 4));
        assert!(!t.has_edge(4, 5));
    }

    #[test]
    fn test_area() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        let t = Triangle::new(0, 1, 2);
        assert!((t.area(&vertices) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_area_is_zero() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, 1.0),
        ];
        let t = Triangle::new(0, 1, 2);
        assert_eq!(t.area(&vertices), 0.0);
    }
}
