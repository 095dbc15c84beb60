//! 2D polygon geometry engine and constraint-driven spatial placement solver.
//!
//! This crate decides where objects may legally be positioned inside a
//! bounded floor region. The floor and every object footprint are flat 2D
//! polygons in a shared planar coordinate system; the answer comes back as a
//! 3D position on the caller's floor plane.
//!
//! # Overview
//!
//! 1. **Geometry** ([`geometry`]): the [`Polygon`] primitive with
//!    containment, area, winding, convexity, offsetting, line splitting,
//!    self-intersection repair and triangle decomposition, plus the
//!    polygon-with-holes [`Region`] and the integer-lattice [`PolygonI`].
//! 2. **Boolean layer** ([`clip`]): union, difference and intersection over
//!    regions, delegated to the `geo-clipper` collaborator.
//! 3. **Triangulation** ([`triangulation`]): an incremental Delaunay
//!    triangulator for point sets and constrained decomposition of regions
//!    through the `earcutr` collaborator.
//! 4. **Sampling** ([`sampling`]): uniformly distributed random points over
//!    triangulated areas, always from a caller-supplied generator.
//! 5. **Placement** ([`placement`]): free-area reduction, candidate
//!    position sampling, the distance-band energy model and deterministic
//!    decoration ordering.
//!
//! All operations are synchronous, allocation-light value transformations;
//! nothing here performs I/O or retains state across calls apart from the
//! scoped precision stack in [`precision`].
//!
//! # Example
//!
//! ```ignore
//! use placer::geometry::{Point, Polygon};
//! use placer::placement::possible_location;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let floor = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
//! let couch = Polygon::rectangle(Point::new(2.0, 2.0), Point::new(5.0, 4.0));
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let position = possible_location(&floor, 0.0, &[couch], &mut rng)?;
//! println!("place the table at {}", position);
//! ```

pub mod clip;
pub mod geometry;
pub mod placement;
pub mod precision;
pub mod sampling;
pub mod triangulation;

pub use clip::BooleanOp;
pub use geometry::{
    BoundingBox, GeometryError, GeometryResult, Line, LineKind, Point, Point3, PointI, Polygon,
    PolygonI, Polygons, Region, Regions, Triangle,
};
pub use placement::{
    decoration_order, energy, possible_location, Footprint, ObjectId, PlacedObject,
    PlacementError, PlacementResult, Relationship,
};
pub use precision::{epsilon, PrecisionGuard, DEFAULT_EPSILON};
pub use triangulation::{delaunay, TriangulationError, TriangulationResult};
