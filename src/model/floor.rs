//! Floor — one level of the building.

use serde::{Deserialize, Serialize};

/// A floor's identity: the key node ids carry in their `floor` attribute,
/// plus the label shown to humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub key: String,
    pub label: String,
}

impl Floor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}
