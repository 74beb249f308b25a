use crate::domain::pin::Pin;

/// Partition of the tag universe into available and selected halves,
/// plus the filter function applied to the accumulated pin store.
///
/// The two halves never overlap. `available` keeps its insertion order
/// until the first removal re-sorts it alphabetically; from then on every
/// removal and clear re-sorts.
#[derive(Debug, Default)]
pub struct TagFilterEngine {
    available: Vec<String>,
    selected: Vec<String>,
}

impl TagFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the available half with the initial tag universe
    pub fn seed(&mut self, tags: Vec<String>) {
        for tag in tags {
            self.note(tag);
        }
    }

    /// Adopt tags seen on freshly arrived pins that the partition does not
    /// know yet. The universe grows lazily as the catalog does.
    pub fn observe(&mut self, pins: &[Pin]) {
        for pin in pins {
            for tag in &pin.tags {
                self.note(tag.clone());
            }
        }
    }

    fn note(&mut self, tag: String) {
        if !self.available.contains(&tag) && !self.selected.contains(&tag) {
            self.available.push(tag);
        }
    }

    /// Move a tag from available to selected; no-op when already selected
    pub fn add(&mut self, tag: &str) -> &[String] {
        if !self.selected.iter().any(|t| t == tag) {
            self.available.retain(|t| t != tag);
            self.selected.push(tag.to_string());
        }
        &self.selected
    }

    /// Move a tag back to available and re-sort the available half
    pub fn remove(&mut self, tag: &str) -> &[String] {
        self.selected.retain(|t| t != tag);
        if !self.available.iter().any(|t| t == tag) {
            self.available.push(tag.to_string());
            self.available.sort();
        }
        &self.selected
    }

    /// Return every selected tag to the available half
    pub fn clear_all(&mut self) -> &[String] {
        let selected = std::mem::take(&mut self.selected);
        for tag in selected {
            if !self.available.contains(&tag) {
                self.available.push(tag);
            }
        }
        self.available.sort();
        &self.selected
    }

    /// Wholesale assignment of the selected half, keeping the partition
    /// disjoint. Unlike `remove`, this does not re-sort `available`.
    pub fn set_selected(&mut self, tags: Vec<String>) {
        let previous = std::mem::take(&mut self.selected);
        for tag in previous {
            if !self.available.contains(&tag) {
                self.available.push(tag);
            }
        }
        for tag in tags {
            if !self.selected.contains(&tag) {
                self.available.retain(|t| t != &tag);
                self.selected.push(tag);
            }
        }
    }

    /// Recompute the displayed subset: a full pass over `items`, AND
    /// semantics over the selected tags. An empty selection shows everything.
    pub fn apply(&self, items: &[Pin]) -> Vec<Pin> {
        if self.selected.is_empty() {
            return items.to_vec();
        }
        items
            .iter()
            .filter(|item| item.has_all_tags(&self.selected))
            .cloned()
            .collect()
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine() -> TagFilterEngine {
        let mut engine = TagFilterEngine::new();
        engine.seed(vec![
            "DnD".to_string(),
            "Fantasy".to_string(),
            "Spells".to_string(),
            "Adventure".to_string(),
        ]);
        engine
    }

    fn pin(id: u64, tags: &[&str]) -> Pin {
        Pin {
            id,
            title: format!("DnD Spell #{}", id),
            category: "Spells".to_string(),
            description: "A powerful spell to control the elements".to_string(),
            image_url: format!("https://picsum.photos/id/110/400/{}", 400 + id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_moves_tag_into_selected() {
        let mut engine = engine();
        let selected = engine.add("Spells").to_vec();

        assert_eq!(selected, vec!["Spells".to_string()]);
        assert!(!engine.available().contains(&"Spells".to_string()));
    }

    #[test]
    fn test_available_keeps_seed_order_until_first_removal() {
        let mut engine = engine();
        engine.add("Spells");
        assert_eq!(engine.available(), &["DnD", "Fantasy", "Adventure"]);

        engine.remove("Spells");
        assert_eq!(engine.available(), &["Adventure", "DnD", "Fantasy", "Spells"]);
    }

    #[test]
    fn test_remove_then_readd_restores_membership() {
        let mut engine = engine();
        engine.add("Spells");
        engine.add("DnD");
        engine.remove("Spells");
        engine.add("Spells");

        let mut selected = engine.selected().to_vec();
        selected.sort();
        assert_eq!(selected, vec!["DnD".to_string(), "Spells".to_string()]);
        assert!(!engine.available().contains(&"Spells".to_string()));
    }

    #[test]
    fn test_clear_all_returns_everything_sorted() {
        let mut engine = engine();
        engine.add("Spells");
        engine.add("Fantasy");
        engine.clear_all();

        assert!(engine.selected().is_empty());
        assert_eq!(engine.available(), &["Adventure", "DnD", "Fantasy", "Spells"]);
    }

    #[test]
    fn test_set_selected_keeps_the_partition_disjoint() {
        let mut engine = engine();
        engine.add("Spells");
        engine.set_selected(vec!["DnD".to_string(), "Adventure".to_string()]);

        assert_eq!(engine.selected(), &["DnD", "Adventure"]);
        for tag in engine.selected() {
            assert!(!engine.available().contains(tag));
        }
        assert!(engine.available().contains(&"Spells".to_string()));
    }

    #[test]
    fn test_apply_uses_and_semantics() {
        let mut engine = engine();
        let items = vec![
            pin(1, &["DnD", "Fantasy", "Spells"]),
            pin(3, &["DnD", "Fantasy", "Items", "RPG"]),
            pin(6, &["DnD", "Fantasy", "Monsters", "RPG", "Campaign"]),
        ];

        engine.set_selected(vec!["DnD".to_string(), "RPG".to_string()]);
        let displayed = engine.apply(&items);
        let ids: Vec<u64> = displayed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn test_apply_with_empty_selection_shows_everything() {
        let engine = TagFilterEngine::new();
        let items = vec![pin(1, &["DnD"]), pin(2, &["Fantasy"])];
        assert_eq!(engine.apply(&items), items);
    }
}
