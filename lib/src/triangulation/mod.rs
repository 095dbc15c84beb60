//! Triangulation of point sets and polygonal regions.
//!
//! Two entry points with different contracts:
//!
//! - [`delaunay`] triangulates a bare point set with an incremental
//!   Bowyer-Watson pass and fails loudly on degenerate input.
//! - [`triangulate_region`] / [`triangulate_ring`] decompose closed contours
//!   (holes supported) by delegating to the `earcutr` ear-clipping
//!   collaborator, returning an empty set for degenerate input instead of an
//!   error.
//!
//! Triangle indices always refer to the vertex list returned alongside them.

pub mod constrained;
pub mod delaunay;

pub use constrained::{triangulate_region, triangulate_ring};
pub use delaunay::delaunay;

use thiserror::Error;

/// Triangulation errors.
#[derive(Debug, Error)]
pub enum TriangulationError {
    /// Too few points for the requested triangulation.
    #[error("degenerate triangulation input: need at least {needed} points, got {got}")]
    DegenerateInput { needed: usize, got: usize },

    /// The ear-clipping collaborator rejected the input.
    #[error("ear clipping failed: {0:?}")]
    Collaborator(earcutr::Error),
}

/// Result type for triangulation operations.
pub type TriangulationResult<T> = Result<T, TriangulationError>;
