//! Node — a room or circulation point in the building graph.

use serde::{Deserialize, Serialize};

/// Room type assigned when the source data carries none.
pub const UNKNOWN_ROOM_TYPE: &str = "Unknown";

/// A room or circulation point on one floor of the building.
///
/// The `id` is the sole addressing mechanism. It is globally unique across
/// floors; floor and zone are encoded as an identifier prefix
/// (e.g. `1A010` = floor 1, zone A, room 010).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Display name. May be derived from a signage label; empty when the
    /// source data carries no usable name.
    pub name: String,
    pub room_type: String,
    /// Square meters. `None` means "not provided" — never zero.
    pub area: Option<f64>,
    /// Floor key, e.g. `"1"`.
    pub floor: String,
    /// Human-readable floor name, e.g. `"Ground floor"`.
    pub floor_label: String,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        floor: impl Into<String>,
        floor_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_type: UNKNOWN_ROOM_TYPE.to_string(),
            area: None,
            floor: floor.into(),
            floor_label: floor_label.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Case-insensitive containment test against id, name and room type.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.room_type.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let node = Node::new("1A010", "1", "Ground floor");
        assert_eq!(node.room_type, UNKNOWN_ROOM_TYPE);
        assert_eq!(node.area, None);
        assert_eq!(node.name, "");
    }

    #[test]
    fn test_matches_id_name_and_type() {
        let node = Node::new("1A010", "1", "Ground floor")
            .with_name("Seminar Room")
            .with_room_type("Seminar")
            .with_area(24.0);
        assert!(node.matches("1a01"));
        assert!(node.matches("seminar room"));
        assert!(node.matches("seminar"));
        assert!(!node.matches("wc"));
    }
}
