//! Distance-band energy model for pairwise placement relationships.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Score a distance against a desired distance band.
///
/// Returns a value in `[0, 1]`: exactly `1.0` whenever `distance` lies
/// inside `[range_start, range_end]`, falling off polynomially on both
/// sides. Below the band the score is `(distance / range_start) ^
/// attraction`, above it `(range_end / distance) ^ attraction`, so the
/// `attraction` exponent controls how sharply being too close or too far is
/// penalized.
pub fn energy(distance: f64, range_start: f64, range_end: f64, attraction: f64) -> f64 {
    if distance < range_start {
        (distance / range_start).powf(attraction)
    } else if distance > range_end {
        (range_end / distance).powf(attraction)
    } else {
        1.0
    }
}

/// A desired distance band between a source object and its targets.
///
/// Created by the caller and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Position of the source object.
    pub source_position: Point,
    /// Positions of the target objects. Only the first drives the score.
    pub target_positions: Vec<Point>,
    /// Lower edge of the ideal distance band.
    pub range_start: f64,
    /// Upper edge of the ideal distance band.
    pub range_end: f64,
    /// Fall-off exponent outside the band.
    pub attraction: f64,
}

impl Relationship {
    /// Create a relationship.
    pub fn new(
        source_position: Point,
        target_positions: Vec<Point>,
        range_start: f64,
        range_end: f64,
        attraction: f64,
    ) -> Self {
        Self {
            source_position,
            target_positions,
            range_start,
            range_end,
            attraction,
        }
    }

    /// Energy contribution of this relationship, negated so that ideal
    /// placements contribute the lowest total.
    ///
    /// Evaluated against the first target position only; a relationship
    /// without targets contributes nothing.
    pub fn pairwise_energy(&self) -> f64 {
        match self.target_positions.first() {
            Some(target) => -energy(
                self.source_position.distance(target),
                self.range_start,
                self.range_end,
                self.attraction,
            ),
            None => 0.0,
        }
    }
}
