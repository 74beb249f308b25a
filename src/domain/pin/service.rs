use super::error::PinServiceError;
use super::model::Pin;
use crate::domain::catalog::{Category, CategoryRepository};
use crate::infrastructure::repositories::ImageRepository;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Tags carried by every pin regardless of category
pub const BASE_TAGS: [&str; 2] = ["DnD", "Fantasy"];

/// Conditional tags, applied when the pin id divides by the modulus.
/// Several can apply to the same pin.
const VARIETY_TAGS: [(u64, &str); 4] = [
    (3, "RPG"),
    (4, "Tabletop"),
    (5, "Adventure"),
    (6, "Campaign"),
];

pub struct PinService {
    category_repo: Arc<dyn CategoryRepository>,
    image_repo: Arc<dyn ImageRepository>,
    // Ids already handed out to some page. Grows monotonically, never shrinks.
    issued_ids: Mutex<HashSet<u64>>,
    total_item_count: u64,
}

impl PinService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        image_repo: Arc<dyn ImageRepository>,
        total_item_count: u64,
    ) -> Self {
        Self {
            category_repo,
            image_repo,
            issued_ids: Mutex::new(HashSet::new()),
            total_item_count,
        }
    }
}

#[async_trait]
pub trait PinServiceApi: Send + Sync {
    /// Generate a page of pins with optional category filtering
    ///
    /// Iterates exactly `limit` id slots starting after `offset`. A slot
    /// yields a pin only when no category filter is set, or when the slot's
    /// cyclically-derived category matches the filter; otherwise the id is
    /// consumed without producing anything. Filtered pages can therefore be
    /// shorter than `limit` and callers must tolerate partial pages.
    async fn get_pins(
        &self,
        limit: usize,
        offset: u64,
        category: Option<&str>,
    ) -> Result<Vec<Pin>, PinServiceError>;

    /// Look up a single pin by id, derived with the same rules as page
    /// generation but without touching the id registry
    async fn get_pin(&self, id: u64) -> Result<Option<Pin>, PinServiceError>;

    /// Every tag the generator can ever attach to a pin
    async fn get_all_unique_tags(&self) -> Result<Vec<String>, PinServiceError>;
}

#[async_trait]
impl PinServiceApi for PinService {
    async fn get_pins(
        &self,
        limit: usize,
        offset: u64,
        category: Option<&str>,
    ) -> Result<Vec<Pin>, PinServiceError> {
        tracing::debug!(limit, offset, category = ?category, "generating pin page");

        let categories = self.category_repo.get_all();
        if categories.is_empty() {
            return Err(PinServiceError::Dependency(
                "category catalog is empty".to_string(),
            ));
        }

        if let Some(name) = category {
            if self.category_repo.find_by_name(name).is_none() {
                tracing::warn!(category = %name, "unknown category in filtered pin request");
            }
        }

        let mut issued = self.issued_ids.lock();
        let mut result = Vec::with_capacity(limit);
        let mut current_id = offset + 1;

        for _ in 0..limit {
            // Monotonic skip past ids some earlier page already produced
            while issued.contains(&current_id) {
                current_id += 1;
            }

            let slot_category = cyclic_category(&categories, current_id);
            if let Some(name) = category {
                if slot_category.name != name {
                    // Slot consumed, id advanced, nothing produced
                    current_id += 1;
                    continue;
                }
            }

            let pin = self.build_pin(current_id, slot_category);
            issued.insert(current_id);
            result.push(pin);
            current_id += 1;
        }

        Ok(result)
    }

    async fn get_pin(&self, id: u64) -> Result<Option<Pin>, PinServiceError> {
        if id == 0 || id > self.total_item_count {
            return Ok(None);
        }

        let categories = self.category_repo.get_all();
        if categories.is_empty() {
            return Err(PinServiceError::Dependency(
                "category catalog is empty".to_string(),
            ));
        }

        Ok(Some(self.build_pin(id, cyclic_category(&categories, id))))
    }

    async fn get_all_unique_tags(&self) -> Result<Vec<String>, PinServiceError> {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();

        let base = BASE_TAGS.iter().copied().map(str::to_string);
        let categories = self.category_repo.get_all().into_iter().map(|c| c.name);
        let variety = VARIETY_TAGS.iter().map(|(_, tag)| tag.to_string());

        for tag in base.chain(categories).chain(variety) {
            if seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }

        Ok(tags)
    }
}

impl PinService {
    /// Derive a pin from its id. Everything except the image URL is a pure
    /// function of the id and the catalog.
    fn build_pin(&self, id: u64, category: &Category) -> Pin {
        let desc_index = (id % category.descriptions.len() as u64) as usize;

        let mut tags: Vec<String> = BASE_TAGS.iter().copied().map(str::to_string).collect();
        tags.push(category.name.clone());
        for (modulus, tag) in VARIETY_TAGS {
            if id % modulus == 0 {
                tags.push(tag.to_string());
            }
        }

        let image_url = self.image_repo.allocate(&category.name, Some(id));
        let singular = category.name.strip_suffix('s').unwrap_or(&category.name);

        Pin {
            id,
            title: format!("DnD {} #{}", singular, id),
            category: category.name.clone(),
            description: category.descriptions[desc_index].clone(),
            image_url,
            tags,
        }
    }
}

fn cyclic_category(categories: &[Category], id: u64) -> &Category {
    &categories[((id - 1) % categories.len() as u64) as usize]
}
