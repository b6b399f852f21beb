//! # Building Graph Model
//!
//! Canonical data types that cross every boundary:
//! schema ↔ assembler ↔ routing ↔ caller.
//!
//! Design rule: this module is pure data — no I/O, no state, no logging.
//! Every raw floor schema converges on these types before anything
//! downstream sees it.

pub mod node;
pub mod edge;
pub mod floor;
pub mod result;

pub use node::{Node, UNKNOWN_ROOM_TYPE};
pub use edge::{Edge, DEFAULT_EDGE_DISTANCE};
pub use floor::Floor;
pub use result::{PathResult, PathStep, RoomDetail};
