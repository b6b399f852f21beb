//! Edge — a traversable connection between two nodes.

use serde::{Deserialize, Serialize};

/// Walking-equivalent meters assumed when the source data omits a distance.
pub const DEFAULT_EDGE_DISTANCE: f64 = 10.0;

/// A corridor or door connecting two nodes.
///
/// Bidirectional edges contribute traversal in both directions at equal
/// weight; there is no asymmetric weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub bidirectional: bool,
    /// Positive walking-equivalent meters.
    pub distance: f64,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, distance: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            bidirectional: true,
            distance,
        }
    }

    pub fn one_way(mut self) -> Self {
        self.bidirectional = false;
        self
    }
}
