//! # Room Query Layer
//!
//! Fuzzy lookup and nearest-facility search over the assembled graph.
//! Everything here is a pure read. The "nearest" searches run one
//! Dijkstra per candidate — O(candidates × graph) — which is the right
//! trade at building scale; no incremental shortest-path structure is
//! maintained.

use crate::graph::Graph;
use crate::model::{Node, PathResult};

impl Graph {
    /// Case-insensitive substring match against id, name and room type.
    pub fn find_room(&self, query: &str) -> Vec<Node> {
        let needle = query.to_lowercase();
        self.ordered_nodes().filter(|n| n.matches(&needle)).cloned().collect()
    }

    /// Rooms whose type contains `room_type`, case-insensitively.
    pub fn rooms_by_type(&self, room_type: &str) -> Vec<Node> {
        let needle = room_type.to_lowercase();
        self.ordered_nodes()
            .filter(|n| n.room_type.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// [`Graph::rooms_by_type`] constrained to one floor.
    pub fn rooms_by_type_on_floor(&self, room_type: &str, floor: &str) -> Vec<Node> {
        let needle = room_type.to_lowercase();
        self.ordered_nodes()
            .filter(|n| n.floor == floor && n.room_type.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Distinct room types, lexicographically sorted.
    pub fn all_room_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.ordered_nodes().map(|n| n.room_type.clone()).collect();
        types.sort();
        types.dedup();
        types
    }

    /// The closest room of a type, by walking distance from `start`.
    ///
    /// `None` when no rooms of that type exist or none are reachable —
    /// "no such facility", not a failure.
    pub fn find_nearest_of_type(&self, start: &str, room_type: &str) -> Option<PathResult> {
        self.nearest_among(start, &self.rooms_by_type(room_type))
    }

    /// Two-tier nearest search: candidates on the start node's own floor
    /// first, then the unrestricted search as fallback.
    ///
    /// Same-floor is a preference tier, not a distance comparison against
    /// cross-floor candidates: any reachable same-floor match wins even if
    /// a cross-floor one would be nearer in pure graph distance.
    pub fn find_nearest_of_type_same_floor(&self, start: &str, room_type: &str) -> Option<PathResult> {
        let start_floor = self.floor_for_room(start)?.to_string();
        let same_floor = self.rooms_by_type_on_floor(room_type, &start_floor);
        self.nearest_among(start, &same_floor)
            .or_else(|| self.find_nearest_of_type(start, room_type))
    }

    /// Candidates are scanned in registration order and the first strict
    /// minimum is kept, so equal-distance ties resolve identically on
    /// every call.
    fn nearest_among(&self, start: &str, candidates: &[Node]) -> Option<PathResult> {
        let mut best: Option<PathResult> = None;
        for candidate in candidates {
            let result = self.find_shortest_path(start, &candidate.id);
            if !result.found {
                continue;
            }
            if best
                .as_ref()
                .is_none_or(|b| result.total_distance < b.total_distance)
            {
                best = Some(result);
            }
        }
        best
    }
}

// ============================================================================
// Tests
// ============================================================================
