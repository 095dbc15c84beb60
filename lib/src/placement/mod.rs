//! Placement of objects inside a bounded floor region.
//!
//! This module decides where a new object may legally stand and in which
//! order existing objects should be decorated:
//!
//! 1. **Free-area reduction**: subtract every occupied footprint from the
//!    floor polygon (see [`solver::reduce_free_area`]).
//! 2. **Candidate sampling**: triangulate the remaining free area and draw a
//!    uniformly distributed point from it ([`solver::sample_free_point`]).
//! 3. **Energy model**: score the distance between related objects against a
//!    desired distance band ([`energy::energy`]).
//! 4. **Decoration ordering**: rank placed objects by their combined metric
//!    score ([`solver::decoration_order`]).
//!
//! Everything here is pure orchestration over caller-supplied state; there
//! is no search loop and no iterative energy minimization.

pub mod energy;
pub mod metrics;
pub mod solver;

pub use energy::{energy, Relationship};
pub use metrics::{score_instances, Metric, MetricKind, ScoredInstance};
pub use solver::{decoration_order, possible_location, reduce_free_area, sample_free_point};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point3, Polygon};
use crate::triangulation::TriangulationError;

/// The silhouette polygon a placed object occupies on the floor plane.
pub type Footprint = Polygon;

/// Identifier of a placed object.
pub type ObjectId = u64;

/// Placement errors.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Free-area reduction or triangulation left nothing to place on.
    #[error("no space available for placement")]
    NoSpaceAvailable,

    /// The free area could not be triangulated.
    #[error("free area triangulation failed: {0}")]
    Triangulation(#[from] TriangulationError),
}

/// Result type for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// An object already placed on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Stable identifier, used as the deterministic ordering tiebreak.
    pub id: ObjectId,
    /// Resolved position in 3D space.
    pub position: Point3,
    /// Silhouette excluded from future placements.
    pub footprint: Footprint,
}

impl PlacedObject {
    /// Create a placed object.
    pub fn new(id: ObjectId, position: Point3, footprint: Footprint) -> Self {
        Self {
            id,
            position,
            footprint,
        }
    }
}
