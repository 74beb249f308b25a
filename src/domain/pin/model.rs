use serde::{Deserialize, Serialize};

/// A generated content card
///
/// Pins are immutable after creation. Tags always contain the base tags
/// plus the pin's own category name; conditional tags depend on the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pin {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl Pin {
    /// True when the pin carries every one of the given tags
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.iter().any(|t| t == tag))
    }
}
