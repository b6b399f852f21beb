//! # Shortest-Path Engine
//!
//! Single-source Dijkstra over the assembled graph. The unvisited-minimum
//! selection is a plain linear scan, not a heap: building graphs hold
//! hundreds of nodes, and the contract here is correctness and
//! determinism, not asymptotics. All edge weights are non-negative by
//! construction.
//!
//! The scan walks node ids in registration order, so the earliest
//! registered node among equal tentative distances is popped first —
//! repeated calls on an unchanged graph return identical results, ties
//! included.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::graph::Graph;
use crate::model::{PathResult, PathStep, RoomDetail};

impl Graph {
    /// Point-to-point route.
    ///
    /// Ids resolve case-insensitively. An unresolvable id or an
    /// unreachable destination yields the `found: false` sentinel rather
    /// than an error.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> PathResult {
        let (Some(start), Some(end)) = (self.resolve_id(start), self.resolve_id(end)) else {
            return PathResult::not_found();
        };

        let mut dist: HashMap<&str, f64> = HashMap::with_capacity(self.node_count());
        let mut prev: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::with_capacity(self.node_count());
        dist.insert(start, 0.0);

        let reached = loop {
            let mut current: Option<(&str, f64)> = None;
            for id in &self.ordered {
                let id = id.as_str();
                if visited.contains(id) {
                    continue;
                }
                let Some(&d) = dist.get(id) else { continue };
                if current.is_none_or(|(_, best)| d < best) {
                    current = Some((id, d));
                }
            }

            // No reachable unvisited node left: graph exhausted.
            let Some((current_id, current_dist)) = current else { break false };
            if current_id == end {
                break true;
            }
            visited.insert(current_id);

            if let Some(neighbors) = self.adjacency_of(current_id) {
                for (neighbor, weight) in neighbors {
                    let neighbor = neighbor.as_str();
                    if visited.contains(neighbor) {
                        continue;
                    }
                    let tentative = current_dist + weight;
                    if dist.get(neighbor).is_none_or(|&d| tentative < d) {
                        dist.insert(neighbor, tentative);
                        prev.insert(neighbor, current_id);
                    }
                }
            }
        };

        if !reached {
            return PathResult::not_found();
        }

        // Walk the predecessor chain backward from the destination.
        let mut chain: Vec<&str> = vec![end];
        let mut cursor = end;
        while let Some(&p) = prev.get(cursor) {
            chain.push(p);
            cursor = p;
        }
        chain.reverse();
        if chain.first().copied() != Some(start) {
            return PathResult::not_found();
        }

        self.materialize(&chain, dist.get(end).copied().unwrap_or(0.0))
    }

    /// Project a reconstructed id chain into the full [`PathResult`].
    fn materialize(&self, chain: &[&str], total_distance: f64) -> PathResult {
        let path_details: Vec<RoomDetail> = chain
            .iter()
            .filter_map(|id| self.node(id))
            .map(RoomDetail::of)
            .collect();

        let steps: Vec<PathStep> = path_details
            .windows(2)
            .map(|hop| {
                let (from, to) = (&hop[0], &hop[1]);
                PathStep {
                    from: from.id.clone(),
                    to: to.id.clone(),
                    from_type: from.room_type.clone(),
                    to_type: to.room_type.clone(),
                    from_floor_label: from.floor_label.clone(),
                    to_floor_label: to.floor_label.clone(),
                    // Every consecutive pair came off an adjacency entry.
                    distance: self.edge_distance(&from.id, &to.id).unwrap_or_default(),
                    is_floor_change: from.floor != to.floor,
                }
            })
            .collect();

        let mut floors_traversed: SmallVec<[String; 4]> =
            path_details.iter().map(|d| d.floor.clone()).collect();
        floors_traversed.sort();
        floors_traversed.dedup();

        PathResult {
            found: true,
            path: chain.iter().map(|id| id.to_string()).collect(),
            crosses_floors: floors_traversed.len() > 1,
            floors_traversed,
            path_details,
            total_distance,
            steps,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::assemble::{self, AssembleConfig, VerticalPattern};
    use crate::graph::Graph;
    use crate::schema::FloorSource;

    /// The reference two-floor building: `1A010 —5— 1K041 —15— 2K041 —8— 2A020`.
    fn two_floor_graph() -> Graph {
        let floors = vec![
            FloorSource::new(
                "1",
                "Ground floor",
                json!({
                    "nodes": [
                        {"id": "1A010", "roomType": "Seminar"},
                        {"id": "1K041", "roomType": "Stairwell"},
                    ],
                    "edges": [{"source": "1A010", "target": "1K041", "distance": 5.0}],
                }),
            ),
            FloorSource::new(
                "2",
                "First floor",
                json!({
                    "nodes": [
                        {"id": "2K041", "roomType": "Stairwell"},
                        {"id": "2A020", "roomType": "Office"},
                    ],
                    "edges": [{"source": "2K041", "target": "2A020", "distance": 8.0}],
                }),
            ),
        ];
        let config = AssembleConfig::new([VerticalPattern::stairwell("K041")]);
        assemble::build(&floors, &config).unwrap()
    }

    #[test]
    fn test_cross_floor_route() {
        let graph = two_floor_graph();
        let result = graph.find_shortest_path("1A010", "2A020");

        assert!(result.found);
        assert_eq!(result.path, vec!["1A010", "1K041", "2K041", "2A020"]);
        assert_eq!(result.total_distance, 28.0);
        assert!(result.crosses_floors);
        assert_eq!(result.floors_traversed.as_slice(), ["1", "2"]);

        let floor_changes: Vec<_> = result.steps.iter().filter(|s| s.is_floor_change).collect();
        assert_eq!(floor_changes.len(), 1);
        assert_eq!(floor_changes[0].from, "1K041");
        assert_eq!(floor_changes[0].to, "2K041");
        assert_eq!(floor_changes[0].distance, 15.0);
    }

    #[test]
    fn test_identity_route() {
        let graph = two_floor_graph();
        let result = graph.find_shortest_path("1A010", "1A010");

        assert!(result.found);
        assert_eq!(result.path, vec!["1A010"]);
        assert_eq!(result.total_distance, 0.0);
        assert!(result.steps.is_empty());
        assert!(!result.crosses_floors);
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let graph = two_floor_graph();
        let result = graph.find_shortest_path("1a010", "2a020");
        assert!(result.found);
        assert_eq!(result.path.first().map(String::as_str), Some("1A010"));
    }

    #[test]
    fn test_unknown_id_yields_sentinel() {
        let graph = two_floor_graph();
        let result = graph.find_shortest_path("ZZZ999", "2A020");
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert!(result.steps.is_empty());
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_unreachable_destination_yields_sentinel() {
        let floors = vec![FloorSource::new(
            "1",
            "Ground floor",
            json!({
                "nodes": [{"id": "1A010"}, {"id": "1A011"}, {"id": "1Z999"}],
                "edges": [{"source": "1A010", "target": "1A011", "distance": 3.0}],
            }),
        )];
        let graph = assemble::build(&floors, &AssembleConfig::default()).unwrap();
        let result = graph.find_shortest_path("1A010", "1Z999");
        assert!(!result.found);
    }

    #[test]
    fn test_equal_cost_tie_breaks_are_stable() {
        // Diamond: S → A → T and S → B → T, all hops cost 5. A registers
        // before B, so the route through A wins every time.
        let floors = vec![FloorSource::new(
            "1",
            "Ground floor",
            json!({
                "nodes": [{"id": "S"}, {"id": "A"}, {"id": "B"}, {"id": "T"}],
                "edges": [
                    {"source": "S", "target": "A", "distance": 5.0},
                    {"source": "S", "target": "B", "distance": 5.0},
                    {"source": "A", "target": "T", "distance": 5.0},
                    {"source": "B", "target": "T", "distance": 5.0},
                ],
            }),
        )];
        let graph = assemble::build(&floors, &AssembleConfig::default()).unwrap();
        for _ in 0..10 {
            let result = graph.find_shortest_path("S", "T");
            assert_eq!(result.path, vec!["S", "A", "T"]);
            assert_eq!(result.total_distance, 10.0);
        }
    }

    #[test]
    fn test_directed_edge_blocks_reverse_route() {
        let floors = vec![FloorSource::new(
            "1",
            "Ground floor",
            json!({
                "nodes": [{"id": "1A010"}, {"id": "1A011"}],
                "edges": [{"source": "1A010", "target": "1A011", "distance": 4.0, "bidirectional": false}],
            }),
        )];
        let graph = assemble::build(&floors, &AssembleConfig::default()).unwrap();
        assert!(graph.find_shortest_path("1A010", "1A011").found);
        assert!(!graph.find_shortest_path("1A011", "1A010").found);
    }

    #[test]
    fn test_step_distances_come_from_adjacency() {
        let graph = two_floor_graph();
        let result = graph.find_shortest_path("1A010", "2A020");
        let hops: Vec<f64> = result.steps.iter().map(|s| s.distance).collect();
        assert_eq!(hops, vec![5.0, 15.0, 8.0]);
        assert_eq!(hops.iter().sum::<f64>(), result.total_distance);
    }
}
