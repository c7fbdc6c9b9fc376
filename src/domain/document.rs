//! Structured lists stored as JSON text inside a single column.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A titled card with an icon, used for about-page features and corporate values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl FeatureCard {
    pub fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Serialize a list for storage.
///
/// # Errors
/// Returns an error if an element fails to serialize.
pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parse a stored list. NULL, empty, or unparseable text yields an empty list.
pub fn decode_list<T: DeserializeOwned>(column: &str, raw: Option<&str>) -> Vec<T> {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() && s != "null" => s,
        _ => return Vec::new(),
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(column, error = %e, "Failed to parse stored JSON list, using empty list");
        Vec::new()
    })
}
