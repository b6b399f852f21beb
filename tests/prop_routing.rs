//! Property tests for the shortest-path engine over generated buildings.
//!
//! Distances are small integers so route sums stay exact in f64 and the
//! symmetry property can assert strict equality.

use proptest::prelude::*;
use serde_json::json;
use wayfinder_rs::{AssembleConfig, FloorSource, Graph, assemble};

/// Node count plus an arbitrary all-bidirectional edge set over it.
fn topology() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (2usize..8).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u32..20u32);
        (Just(n), proptest::collection::vec(edge, 0..16))
    })
}

fn build_graph(n: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let nodes: Vec<_> = (0..n).map(|i| json!({"id": format!("R{i:02}")})).collect();
    let edges: Vec<_> = edges
        .iter()
        .map(|(a, b, d)| {
            json!({
                "source": format!("R{a:02}"),
                "target": format!("R{b:02}"),
                "distance": *d as f64,
            })
        })
        .collect();
    let floor = FloorSource::new("1", "Ground floor", json!({"nodes": nodes, "edges": edges}));
    assemble::build(&[floor], &AssembleConfig::default()).unwrap()
}

proptest! {
    // For every node n: the identity route is found, trivial and free.
    #[test]
    fn identity_route_holds((n, edges) in topology()) {
        let graph = build_graph(n, &edges);
        for room in graph.all_rooms() {
            let result = graph.find_shortest_path(&room.id, &room.id);
            prop_assert!(result.found);
            prop_assert_eq!(&result.path, &vec![room.id.clone()]);
            prop_assert_eq!(result.total_distance, 0.0);
            prop_assert!(result.steps.is_empty());
        }
    }

    // On an all-bidirectional graph, distance is symmetric.
    #[test]
    fn distance_symmetry((n, edges) in topology()) {
        let graph = build_graph(n, &edges);
        let rooms = graph.all_rooms();
        for a in &rooms {
            for b in &rooms {
                let ab = graph.find_shortest_path(&a.id, &b.id);
                let ba = graph.find_shortest_path(&b.id, &a.id);
                prop_assert_eq!(ab.found, ba.found);
                if ab.found {
                    prop_assert_eq!(ab.total_distance, ba.total_distance);
                }
            }
        }
    }

    // dist(a, c) <= dist(a, b) + dist(b, c) whenever the legs exist.
    #[test]
    fn triangle_inequality((n, edges) in topology()) {
        let graph = build_graph(n, &edges);
        let rooms = graph.all_rooms();
        for a in &rooms {
            for b in &rooms {
                for c in &rooms {
                    let ab = graph.find_shortest_path(&a.id, &b.id);
                    let bc = graph.find_shortest_path(&b.id, &c.id);
                    if !ab.found || !bc.found {
                        continue;
                    }
                    let ac = graph.find_shortest_path(&a.id, &c.id);
                    prop_assert!(ac.found);
                    prop_assert!(
                        ac.total_distance <= ab.total_distance + bc.total_distance + 1e-9,
                        "dist({},{}) = {} > {} + {}",
                        a.id, c.id, ac.total_distance, ab.total_distance, bc.total_distance
                    );
                }
            }
        }
    }

    // A route's reported total equals the sum of its step distances.
    #[test]
    fn steps_sum_to_total((n, edges) in topology()) {
        let graph = build_graph(n, &edges);
        let rooms = graph.all_rooms();
        for a in &rooms {
            for b in &rooms {
                let result = graph.find_shortest_path(&a.id, &b.id);
                if result.found {
                    let sum: f64 = result.steps.iter().map(|s| s.distance).sum();
                    prop_assert_eq!(sum, result.total_distance);
                }
            }
        }
    }
}
