//! PathResult — the structured output of a shortest-path query.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Node;

/// Per-node projection carried in a [`PathResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetail {
    pub id: String,
    pub room_type: String,
    pub area: Option<f64>,
    pub floor: String,
    pub floor_label: String,
}

impl RoomDetail {
    pub fn of(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            room_type: node.room_type.clone(),
            area: node.area,
            floor: node.floor.clone(),
            floor_label: node.floor_label.clone(),
        }
    }
}

/// One hop of a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub from_type: String,
    pub to_type: String,
    pub from_floor_label: String,
    pub to_floor_label: String,
    /// Edge weight looked up from the adjacency table, never recomputed.
    pub distance: f64,
    /// True iff the two endpoints lie on different floors, regardless of
    /// whether the traversed edge is a synthesized inter-floor edge.
    pub is_floor_change: bool,
}

/// Result of a point-to-point route query.
///
/// A pure, ephemeral computation output: created per query, never stored
/// by this crate. Unresolvable ids and unreachable destinations yield the
/// [`PathResult::not_found`] sentinel rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub found: bool,
    /// Node ids start to end, inclusive.
    pub path: Vec<String>,
    pub path_details: Vec<RoomDetail>,
    pub total_distance: f64,
    pub steps: Vec<PathStep>,
    pub crosses_floors: bool,
    /// Sorted, deduplicated floor keys visited along the route.
    pub floors_traversed: SmallVec<[String; 4]>,
}

impl PathResult {
    /// The `found: false` sentinel.
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            path_details: Vec::new(),
            total_distance: 0.0,
            steps: Vec::new(),
            crosses_floors: false,
            floors_traversed: SmallVec::new(),
        }
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}
