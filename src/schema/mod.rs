//! # Floor Schema Normalizer
//!
//! Converts one floor's raw graph description — whichever field names that
//! floor's data happens to use — into canonical [`Node`] and [`Edge`]
//! collections.
//!
//! Pure transformation, no side effects. Malformed input (a floor without
//! a node or edge collection, a record that decodes into nothing usable)
//! is a caller configuration error and fails fast at construction time;
//! it is never recovered from per query.

mod raw;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{DEFAULT_EDGE_DISTANCE, Edge, Node, UNKNOWN_ROOM_TYPE};
use crate::{Error, Result};
use raw::{RawEdge, RawNode};

/// Accepted names for the node collection in raw floor data.
const NODE_KEYS: [&str; 2] = ["nodes", "rooms"];
/// Accepted names for the edge collection in raw floor data.
const EDGE_KEYS: [&str; 3] = ["edges", "connections", "links"];

/// One floor's raw description plus its identity in the building.
///
/// The position of a `FloorSource` in the list handed to the assembler
/// defines floor adjacency for inter-floor edge synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorSource {
    /// Floor key, e.g. `"1"`. Becomes the `floor` attribute of every node
    /// on this floor.
    pub key: String,
    /// Human-readable floor name, e.g. `"Ground floor"`.
    pub label: String,
    /// Raw graph description in the floor's native schema.
    pub data: Value,
}

impl FloorSource {
    pub fn new(key: impl Into<String>, label: impl Into<String>, data: Value) -> Self {
        Self { key: key.into(), label: label.into(), data }
    }
}

/// Canonical output of normalizing one floor.
#[derive(Debug, Clone, Default)]
pub struct NormalizedFloor {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Normalize one floor's raw description.
pub fn normalize_floor(source: &FloorSource) -> Result<NormalizedFloor> {
    let raw_nodes = collection(source, &NODE_KEYS, "node")?;
    let raw_edges = collection(source, &EDGE_KEYS, "edge")?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for value in raw_nodes {
        let raw: RawNode = decode(source, value)?;
        nodes.push(canonical_node(raw, source));
    }

    let mut edges = Vec::with_capacity(raw_edges.len());
    for value in raw_edges {
        let raw: RawEdge = decode(source, value)?;
        edges.push(canonical_edge(raw));
    }

    Ok(NormalizedFloor { nodes, edges })
}

fn collection<'a>(source: &'a FloorSource, keys: &[&str], what: &str) -> Result<&'a Vec<Value>> {
    for key in keys {
        if let Some(Value::Array(items)) = source.data.get(key) {
            return Ok(items);
        }
    }
    Err(Error::Schema {
        floor: source.key.clone(),
        message: format!("missing {what} collection (expected one of {keys:?})"),
    })
}

fn decode<T: DeserializeOwned>(source: &FloorSource, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| Error::Decode {
        floor: source.key.clone(),
        source: e,
    })
}

fn canonical_node(raw: RawNode, source: &FloorSource) -> Node {
    let name = derive_name(&raw);
    let room_type = raw
        .room_type
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ROOM_TYPE.to_string());
    // None means "not provided"; zero would falsely claim a zero-area room.
    let area = raw.area.filter(|a| a.is_finite() && *a > 0.0);

    Node {
        id: raw.id,
        name,
        room_type,
        area,
        floor: source.key.clone(),
        floor_label: source.label.clone(),
    }
}

/// Name precedence: explicit field, else first non-empty signage-label
/// segment, else display text after the leading identifier token, else
/// empty.
fn derive_name(raw: &RawNode) -> String {
    if let Some(name) = &raw.name {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    if let Some(label) = &raw.label {
        if let Some(segment) = label.split(['\n', '-']).map(str::trim).find(|s| !s.is_empty()) {
            return segment.to_string();
        }
    }

    if let Some(display) = &raw.display {
        let mut tokens = display.split_whitespace();
        tokens.next(); // leading identifier token
        let rest = tokens.collect::<Vec<_>>().join(" ");
        if !rest.is_empty() {
            return rest;
        }
    }

    String::new()
}

fn canonical_edge(raw: RawEdge) -> Edge {
    Edge {
        source: raw.source,
        target: raw.target,
        bidirectional: raw.bidirectional.unwrap_or(true),
        distance: raw
            .distance
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_EDGE_DISTANCE),
    }
}

// ============================================================================
// Tests
// ============================================================================
