//! # The assembled building graph
//!
//! Built exactly once by [`crate::assemble`], immutable afterwards: no
//! method here mutates anything, so an `Arc<Graph>` is safe to query from
//! any number of threads without coordination.
//!
//! Lookup structure:
//! - `nodes`: id → canonical [`Node`]
//! - `adjacency`: id → (neighbor id → distance); the inner map is ordered
//!   so neighbor iteration, and with it equal-cost tie-breaking, is the
//!   same on every run
//! - `ordered`: node ids in registration order (floor order, then record
//!   order) — the stable scan order for Dijkstra and candidate searches
//! - `lower_index`: case-folded id → canonical id, first registration wins

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::model::{Floor, Node};

/// The immutable building graph: node table, adjacency, floor registry.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: HashMap<String, Node>,
    pub(crate) adjacency: HashMap<String, BTreeMap<String, f64>>,
    pub(crate) ordered: Vec<String>,
    pub(crate) lower_index: HashMap<String, String>,
    pub(crate) floors: Vec<Floor>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Resolve a caller-supplied id to the canonical stored id,
    /// case-insensitively. Exact matches win; otherwise the case-folded
    /// index decides (first-registered id on folded collisions).
    pub fn resolve_id(&self, id: &str) -> Option<&str> {
        if let Some((canonical, _)) = self.nodes.get_key_value(id) {
            return Some(canonical.as_str());
        }
        self.lower_index.get(&id.to_lowercase()).map(String::as_str)
    }

    /// Neighbors of a node with edge distances, in stable (sorted) order.
    pub fn adjacency_of(&self, id: &str) -> Option<&BTreeMap<String, f64>> {
        self.adjacency.get(id)
    }

    /// Distance of the directed adjacency entry `from → to`, if present.
    pub fn edge_distance(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Directed adjacency entries; a bidirectional edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// All nodes in registration order.
    pub(crate) fn ordered_nodes(&self) -> impl Iterator<Item = &Node> {
        self.ordered.iter().filter_map(|id| self.nodes.get(id))
    }

    // ========================================================================
    // Direct projections
    // ========================================================================

    pub fn all_rooms(&self) -> Vec<Node> {
        self.ordered_nodes().cloned().collect()
    }

    pub fn rooms_on_floor(&self, floor: &str) -> Vec<Node> {
        self.ordered_nodes().filter(|n| n.floor == floor).cloned().collect()
    }

    /// Floor key of a room, resolved case-insensitively.
    pub fn floor_for_room(&self, id: &str) -> Option<&str> {
        let canonical = self.resolve_id(id)?;
        self.nodes.get(canonical).map(|n| n.floor.as_str())
    }

    pub fn floor_label(&self, key: &str) -> Option<&str> {
        self.floors.iter().find(|f| f.key == key).map(|f| f.label.as_str())
    }

    /// Floors in building order (the order the assembler was given).
    pub fn all_floors(&self) -> &[Floor] {
        &self.floors
    }
}
