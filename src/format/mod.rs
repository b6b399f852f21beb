//! # Path Formatter
//!
//! Renders a [`PathResult`] into the structured text block a downstream
//! language-model caller embeds as context, plus a human-readable building
//! summary. Rendering is deterministic: same input, same text. Policy on
//! what reaches an end user lives outside this crate.

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::model::PathResult;

/// Line emitted for a failed route query.
pub const NO_ROUTE_SENTINEL: &str =
    "ROUTE NOT FOUND: one of the requested rooms is unknown or unreachable.";

/// Render a route for a language-generation consumer.
///
/// A summary block (rounded total distance, step count, floors crossed in
/// traversal order), then one line per step and one line per room passed.
pub fn format_path_for_ai(result: &PathResult) -> String {
    if !result.found {
        return NO_ROUTE_SENTINEL.to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "ROUTE: {:.0} m in {} step(s).\n",
        result.total_distance.round(),
        result.steps.len()
    ));

    if result.crosses_floors {
        let labels = traversal_floor_labels(result);
        out.push_str(&format!(
            "FLOORS: crosses {} floors ({}).\n",
            result.floors_traversed.len(),
            labels.join(" -> ")
        ));
    } else {
        let label = result
            .path_details
            .first()
            .map(|d| d.floor_label.as_str())
            .unwrap_or_default();
        out.push_str(&format!("FLOORS: stays on {label}.\n"));
    }

    out.push_str("STEPS:\n");
    for (index, step) in result.steps.iter().enumerate() {
        if step.is_floor_change {
            out.push_str(&format!(
                "  {}. {} -> {}: {:.0} m, floor change {} -> {}\n",
                index + 1,
                step.from,
                step.to,
                step.distance,
                step.from_floor_label,
                step.to_floor_label,
            ));
        } else {
            out.push_str(&format!(
                "  {}. {} -> {}: {:.0} m\n",
                index + 1,
                step.from,
                step.to,
                step.distance,
            ));
        }
    }

    out.push_str("ROOMS PASSED:\n");
    for detail in &result.path_details {
        match detail.area {
            Some(area) => out.push_str(&format!(
                "  - {}: {}, {:.0} m², {}\n",
                detail.id, detail.room_type, area, detail.floor_label
            )),
            None => out.push_str(&format!(
                "  - {}: {}, {}\n",
                detail.id, detail.room_type, detail.floor_label
            )),
        }
    }

    out
}

/// Floor labels in traversal order, consecutive duplicates collapsed.
fn traversal_floor_labels(result: &PathResult) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for detail in &result.path_details {
        if labels.last() != Some(&detail.floor_label.as_str()) {
            labels.push(&detail.floor_label);
        }
    }
    labels
}

/// Human-readable building overview: room counts per floor plus a
/// room-type histogram, both in stable order.
pub fn building_summary(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Building: {} rooms across {} floor(s).\n",
        graph.node_count(),
        graph.all_floors().len()
    ));

    for floor in graph.all_floors() {
        let count = graph.rooms_on_floor(&floor.key).len();
        out.push_str(&format!("  {} ({}): {} room(s)\n", floor.label, floor.key, count));
    }

    out.push_str("Room types:\n");
    let mut histogram: BTreeMap<String, usize> = BTreeMap::new();
    for node in graph.all_rooms() {
        *histogram.entry(node.room_type).or_default() += 1;
    }
    for (room_type, count) in histogram {
        out.push_str(&format!("  {room_type}: {count}\n"));
    }

    out
}

// ============================================================================
// Tests
// ============================================================================
