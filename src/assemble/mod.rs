//! # Graph Assembler
//!
//! Merges normalized per-floor node sets and intra-floor edges into one
//! immutable [`Graph`], then synthesizes the inter-floor edges that
//! stairwells and lift lobbies provide.
//!
//! Floor adjacency is positional: floors adjacent in the input list are
//! adjacent in the building. Vertical-circulation nodes on adjacent floors
//! match by identifier suffix (`1K041` ↔ `2K041` both end in `K041`).

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::Graph;
use crate::model::{Edge, Floor, Node};
use crate::schema::{self, FloorSource, NormalizedFloor};
use crate::{Error, Result};

/// Walking-equivalent cost of one stairwell crossing between adjacent
/// floors.
pub const STAIR_CROSSING_DISTANCE: f64 = 15.0;
/// Lift-lobby crossings price the vestibule walk, not the ride.
pub const LIFT_CROSSING_DISTANCE: f64 = 10.0;

/// What kind of vertical circulation a suffix pattern names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CirculationKind {
    Stairwell,
    Lift,
}

impl CirculationKind {
    pub fn crossing_distance(self) -> f64 {
        match self {
            CirculationKind::Stairwell => STAIR_CROSSING_DISTANCE,
            CirculationKind::Lift => LIFT_CROSSING_DISTANCE,
        }
    }
}

/// An identifier suffix shared by matching vertical-circulation nodes on
/// adjacent floors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalPattern {
    pub suffix: String,
    pub kind: CirculationKind,
}

impl VerticalPattern {
    pub fn stairwell(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into(), kind: CirculationKind::Stairwell }
    }

    pub fn lift(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into(), kind: CirculationKind::Lift }
    }
}

/// Assembly configuration: which identifier suffixes link adjacent floors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembleConfig {
    pub patterns: Vec<VerticalPattern>,
}

impl AssembleConfig {
    pub fn new(patterns: impl IntoIterator<Item = VerticalPattern>) -> Self {
        Self { patterns: patterns.into_iter().collect() }
    }
}

/// Build the immutable building graph from ordered floor descriptions.
///
/// Node ids must be globally unique across floors; a duplicate is a
/// construction error, never a silent overwrite.
pub fn build(floors: &[FloorSource], config: &AssembleConfig) -> Result<Graph> {
    let normalized = floors
        .iter()
        .map(schema::normalize_floor)
        .collect::<Result<Vec<NormalizedFloor>>>()?;

    let mut nodes: HashMap<String, Node> = HashMap::new();
    let mut adjacency: HashMap<String, BTreeMap<String, f64>> = HashMap::new();
    let mut ordered: Vec<String> = Vec::new();
    let mut lower_index: HashMap<String, String> = HashMap::new();
    let mut floor_registry: Vec<Floor> = Vec::with_capacity(floors.len());

    // Pass 1: register every node on every floor before any edge is
    // considered, so source data may connect nodes across floors too.
    for (source, floor) in floors.iter().zip(&normalized) {
        floor_registry.push(Floor::new(source.key.clone(), source.label.clone()));

        for node in &floor.nodes {
            if let Some(existing) = nodes.get(&node.id) {
                return Err(Error::DuplicateNode {
                    id: node.id.clone(),
                    first_floor: existing.floor.clone(),
                    second_floor: node.floor.clone(),
                });
            }
            lower_index
                .entry(node.id.to_lowercase())
                .or_insert_with(|| node.id.clone());
            ordered.push(node.id.clone());
            adjacency.insert(node.id.clone(), BTreeMap::new());
            nodes.insert(node.id.clone(), node.clone());
        }

        debug!(
            floor = %source.key,
            nodes = floor.nodes.len(),
            edges = floor.edges.len(),
            "normalized floor"
        );
    }

    // Pass 2: materialize edges whose endpoints both exist.
    for (source, floor) in floors.iter().zip(&normalized) {
        for edge in &floor.edges {
            if !nodes.contains_key(&edge.source) || !nodes.contains_key(&edge.target) {
                warn!(
                    floor = %source.key,
                    source = %edge.source,
                    target = %edge.target,
                    "edge references unknown node, skipped"
                );
                continue;
            }
            link(&mut adjacency, edge);
        }
    }

    // Pass 3: synthesize vertical links between adjacent floors.
    for pair in normalized.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        for pattern in &config.patterns {
            for low in suffix_matches(lower, &pattern.suffix) {
                for high in suffix_matches(upper, &pattern.suffix) {
                    let edge = Edge::new(
                        low.id.clone(),
                        high.id.clone(),
                        pattern.kind.crossing_distance(),
                    );
                    link(&mut adjacency, &edge);
                    debug!(
                        lower = %low.id,
                        upper = %high.id,
                        kind = ?pattern.kind,
                        "synthesized inter-floor edge"
                    );
                }
            }
        }
    }

    let graph = Graph { nodes, adjacency, ordered, lower_index, floors: floor_registry };
    debug!(
        nodes = graph.node_count(),
        adjacency_entries = graph.edge_count(),
        floors = graph.all_floors().len(),
        "assembled building graph"
    );
    Ok(graph)
}

fn link(adjacency: &mut HashMap<String, BTreeMap<String, f64>>, edge: &Edge) {
    if let Some(entry) = adjacency.get_mut(&edge.source) {
        entry.insert(edge.target.clone(), edge.distance);
    }
    if edge.bidirectional {
        if let Some(entry) = adjacency.get_mut(&edge.target) {
            entry.insert(edge.source.clone(), edge.distance);
        }
    }
}

/// Vertical-circulation candidates on one floor, in record order.
fn suffix_matches<'a>(floor: &'a NormalizedFloor, suffix: &'a str) -> impl Iterator<Item = &'a Node> {
    floor.nodes.iter().filter(move |n| n.id.ends_with(suffix))
}

// ============================================================================
// Tests
// ============================================================================
