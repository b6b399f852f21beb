//! # wayfinder-rs — Indoor Navigation Core
//!
//! Locates rooms and computes walking routes inside a multi-floor building,
//! given a heterogeneous set of per-floor graph descriptions.
//!
//! ## Design Principles
//!
//! 1. **Normalize at the boundary**: every floor's native schema decodes
//!    into one canonical `Node`/`Edge` shape before anything downstream
//!    sees it
//! 2. **One immutable graph**: assembled once, queried forever — no
//!    mutation API, so concurrent readers need no coordination
//! 3. **Missing routes are flags, not errors**: a route that does not
//!    exist is `found: false`, never an `Err`
//! 4. **Formatter owns nothing**: rendering a result is a pure function
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use wayfinder_rs::{AssembleConfig, FloorSource, Navigator, VerticalPattern};
//!
//! # fn main() -> wayfinder_rs::Result<()> {
//! let floors = vec![
//!     FloorSource::new("1", "Ground floor", json!({
//!         "nodes": [
//!             {"id": "1A010", "name": "Seminar Room", "roomType": "Seminar"},
//!             {"id": "1K041", "roomType": "Stairwell"},
//!         ],
//!         "edges": [{"source": "1A010", "target": "1K041", "distance": 5.0}],
//!     })),
//!     FloorSource::new("2", "First floor", json!({
//!         "nodes": [
//!             {"id": "2K041", "roomType": "Stairwell"},
//!             {"id": "2A020", "roomType": "Office"},
//!         ],
//!         "edges": [{"source": "2K041", "target": "2A020", "distance": 8.0}],
//!     })),
//! ];
//!
//! let config = AssembleConfig::new([VerticalPattern::stairwell("K041")]);
//! let nav = Navigator::build(&floors, &config)?;
//!
//! let route = nav.find_shortest_path("1a010", "2A020");
//! assert!(route.found);
//! assert_eq!(route.total_distance, 28.0);
//! assert!(route.crosses_floors);
//! # Ok(())
//! # }
//! ```
//!
//! ## Query surface
//!
//! | Operation | Module |
//! |-----------|--------|
//! | `find_shortest_path` | `route` |
//! | `find_room`, `rooms_by_type*`, `find_nearest_of_type*` | `query` |
//! | `rooms_on_floor`, `all_rooms`, `floor_*` | `graph` |
//! | `format_path_for_ai`, `building_summary` | `format` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod schema;
pub mod graph;
pub mod assemble;
pub mod route;
pub mod query;
pub mod format;

use std::sync::Arc;

use parking_lot::RwLock;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    DEFAULT_EDGE_DISTANCE, Edge, Floor, Node, PathResult, PathStep, RoomDetail,
    UNKNOWN_ROOM_TYPE,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use assemble::{
    AssembleConfig, CirculationKind, LIFT_CROSSING_DISTANCE, STAIR_CROSSING_DISTANCE,
    VerticalPattern,
};
pub use format::{NO_ROUTE_SENTINEL, building_summary, format_path_for_ai};
pub use graph::Graph;
pub use schema::{FloorSource, NormalizedFloor, normalize_floor};

// ============================================================================
// Top-level Navigator handle
// ============================================================================

/// The primary entry point. A `Navigator` owns the immutable building
/// graph and exposes the whole query surface.
///
/// Queries run against an [`Arc<Graph>`] snapshot. [`Navigator::rebuild`]
/// constructs a complete replacement graph off to the side and only then
/// swaps the reference under the write lock, so concurrent readers never
/// observe a partially rebuilt graph.
#[derive(Debug)]
pub struct Navigator {
    graph: RwLock<Arc<Graph>>,
}

impl Navigator {
    /// Assemble the graph from ordered floor descriptions.
    pub fn build(floors: &[FloorSource], config: &AssembleConfig) -> Result<Self> {
        let graph = assemble::build(floors, config)?;
        Ok(Self { graph: RwLock::new(Arc::new(graph)) })
    }

    /// Wrap an already-assembled graph.
    pub fn with_graph(graph: Graph) -> Self {
        Self { graph: RwLock::new(Arc::new(graph)) }
    }

    /// Shared read handle onto the current graph; cheap to clone and safe
    /// to query from any thread.
    pub fn snapshot(&self) -> Arc<Graph> {
        self.graph.read().clone()
    }

    /// Swap in a graph rebuilt from updated floor data.
    ///
    /// The replacement is assembled completely before the swap; on error
    /// the current graph stays in place. Readers holding earlier snapshots
    /// keep them, new queries see the new graph.
    pub fn rebuild(&self, floors: &[FloorSource], config: &AssembleConfig) -> Result<()> {
        let next = Arc::new(assemble::build(floors, config)?);
        *self.graph.write() = next;
        Ok(())
    }

    // ========================================================================
    // Delegated query surface
    // ========================================================================

    pub fn find_shortest_path(&self, start: &str, end: &str) -> PathResult {
        self.snapshot().find_shortest_path(start, end)
    }

    pub fn find_room(&self, query: &str) -> Vec<Node> {
        self.snapshot().find_room(query)
    }

    pub fn rooms_by_type(&self, room_type: &str) -> Vec<Node> {
        self.snapshot().rooms_by_type(room_type)
    }

    pub fn rooms_by_type_on_floor(&self, room_type: &str, floor: &str) -> Vec<Node> {
        self.snapshot().rooms_by_type_on_floor(room_type, floor)
    }

    pub fn all_room_types(&self) -> Vec<String> {
        self.snapshot().all_room_types()
    }

    pub fn rooms_on_floor(&self, floor: &str) -> Vec<Node> {
        self.snapshot().rooms_on_floor(floor)
    }

    pub fn all_rooms(&self) -> Vec<Node> {
        self.snapshot().all_rooms()
    }

    pub fn find_nearest_of_type(&self, start: &str, room_type: &str) -> Option<PathResult> {
        self.snapshot().find_nearest_of_type(start, room_type)
    }

    pub fn find_nearest_of_type_same_floor(
        &self,
        start: &str,
        room_type: &str,
    ) -> Option<PathResult> {
        self.snapshot().find_nearest_of_type_same_floor(start, room_type)
    }

    pub fn floor_for_room(&self, id: &str) -> Option<String> {
        self.snapshot().floor_for_room(id).map(str::to_string)
    }

    pub fn floor_label(&self, key: &str) -> Option<String> {
        self.snapshot().floor_label(key).map(str::to_string)
    }

    pub fn all_floors(&self) -> Vec<Floor> {
        self.snapshot().all_floors().to_vec()
    }

    pub fn building_summary(&self) -> String {
        format::building_summary(&self.snapshot())
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Construction-time failures. Query operations never return these:
/// unresolvable ids and unreachable destinations are signaled through
/// [`PathResult::not_found`] and `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A floor description is missing its node or edge collection.
    #[error("floor {floor}: {message}")]
    Schema { floor: String, message: String },

    /// A raw record does not decode into the canonical shape.
    #[error("floor {floor}: malformed record: {source}")]
    Decode {
        floor: String,
        #[source]
        source: serde_json::Error,
    },

    /// Node ids must be globally unique across floors.
    #[error("duplicate node id {id} (first on floor {first_floor}, again on floor {second_floor})")]
    DuplicateNode {
        id: String,
        first_floor: String,
        second_floor: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
