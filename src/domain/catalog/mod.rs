use serde::{Deserialize, Serialize};

/// A thematic content bucket with its ordered description templates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub descriptions: Vec<String>,
}

/// Repository trait for accessing the static category catalog
///
/// Catalog order is significant: pin generation cycles through categories
/// by id, so implementations must return them in their defined order.
pub trait CategoryRepository: Send + Sync {
    fn get_all(&self) -> Vec<Category>;
    fn find_by_name(&self, name: &str) -> Option<Category>;
}
