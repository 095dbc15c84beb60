//! Geometry primitives.
//!
//! Points, lines, bounding boxes, polygons, polygons-with-holes and their
//! lattice counterparts. Everything here is a plain value type; operations
//! that need randomness take an injected generator and operations that can
//! fail return a typed error.

mod bounding_box;
mod lattice;
mod line;
mod point;
mod polygon;
mod region;
mod triangle;

pub use bounding_box::BoundingBox;
pub use lattice::PolygonI;
pub use line::{Line, LineKind, Lines};
pub use point::{Point, Point3, PointI, Points};
pub use polygon::{Polygon, Polygons, TriangleStrip};
pub use region::{Region, Regions};
pub use triangle::Triangle;

use thiserror::Error;

/// Errors raised by polygon predicates.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Both turn directions occur and their counts cancel exactly, so
    /// neither convexity answer would be honest.
    #[error("convexity is ambiguous: turn directions balance out over {vertices} vertices")]
    AmbiguousConvexity { vertices: usize },
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
