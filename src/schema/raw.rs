//! Raw per-floor record shapes.
//!
//! Floor data arrives in whichever schema each floor's survey tooling
//! emitted. Serde aliases fold the known field-name variants into one
//! shape; the required fields (`id`, edge endpoints) fail decoding when
//! absent, everything else defaults explicitly in `canonical_node` /
//! `canonical_edge`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawNode {
    #[serde(alias = "roomId", alias = "nodeId")]
    pub id: String,

    #[serde(default, alias = "roomName")]
    pub name: Option<String>,

    /// Signage label: possibly multi-line or dash-delimited,
    /// e.g. `"1A010 - Seminar Room - 24 seats"`.
    #[serde(default, alias = "title")]
    pub label: Option<String>,

    /// Generic display text of the form `"<id> <name...>"`.
    #[serde(default, alias = "text")]
    pub display: Option<String>,

    #[serde(default, alias = "roomType", alias = "type", alias = "category")]
    pub room_type: Option<String>,

    #[serde(default, alias = "size", alias = "sqm")]
    pub area: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEdge {
    #[serde(alias = "from", alias = "src")]
    pub source: String,

    #[serde(alias = "to", alias = "dst")]
    pub target: String,

    #[serde(default, alias = "weight", alias = "length")]
    pub distance: Option<f64>,

    #[serde(default, alias = "twoWay", alias = "undirected")]
    pub bidirectional: Option<bool>,
}
