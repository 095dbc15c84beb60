//! Per-instance scoring metrics for decoration ordering.

use serde::{Deserialize, Serialize};

use super::{ObjectId, PlacedObject};

/// Metric kinds evaluated by the decoration ordering.
pub const DEFAULT_METRIC_KINDS: &[MetricKind] = &[MetricKind::Size];

/// A scoring dimension computed per placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Footprint extent, measured as the bounding-box diagonal length.
    Size,
}

impl MetricKind {
    /// Compute this metric for one placed object.
    pub fn measure(&self, object: &PlacedObject) -> f64 {
        match self {
            MetricKind::Size => object.footprint.bounding_box().diagonal(),
        }
    }
}

/// A metric value computed for one instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: f64,
}

/// A placed instance with its combined score, valid for one solver call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredInstance {
    pub id: ObjectId,
    pub metrics: Vec<Metric>,
    pub score: f64,
}

/// Score every instance against the given metric kinds.
///
/// The combined score is the arithmetic mean of the metric values; scoring
/// with no kinds yields zero.
pub fn score_instances(objects: &[PlacedObject], kinds: &[MetricKind]) -> Vec<ScoredInstance> {
    objects
        .iter()
        .map(|object| {
            let metrics: Vec<Metric> = kinds
                .iter()
                .map(|kind| Metric {
                    kind: *kind,
                    value: kind.measure(object),
                })
                .collect();
            let score = if metrics.is_empty() {
                0.0
            } else {
                metrics.iter().map(|metric| metric.value).sum::<f64>() / metrics.len() as f64
            };
            ScoredInstance {
                id: object.id,
                metrics,
                score,
            }
        })
        .collect()
}
