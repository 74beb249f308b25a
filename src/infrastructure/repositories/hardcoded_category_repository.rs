use crate::domain::catalog::{Category, CategoryRepository};
use std::sync::LazyLock;

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category {
            name: "Spells".to_string(),
            descriptions: vec![
                "A powerful spell to control the elements".to_string(),
                "An ancient ritual from forgotten tomes".to_string(),
                "A beginner's cantrip with surprising uses".to_string(),
                "A spell of protection against malevolent forces".to_string(),
                "A complex incantation requiring rare components".to_string(),
            ],
        },
        Category {
            name: "Locations".to_string(),
            descriptions: vec![
                "An abandoned temple hidden in dense forests".to_string(),
                "A bustling medieval town with a dark secret".to_string(),
                "A treacherous mountain pass guarded by ancient beasts".to_string(),
                "A mystical grove where fey creatures dwell".to_string(),
                "A forgotten dungeon beneath an ancient castle".to_string(),
            ],
        },
        Category {
            name: "Items".to_string(),
            descriptions: vec![
                "A legendary sword with mysterious engravings".to_string(),
                "A magical amulet that grants strange powers".to_string(),
                "A cursed ring sought by many adventurers".to_string(),
                "An ancient tome containing forbidden knowledge".to_string(),
                "A seemingly ordinary object with extraordinary abilities".to_string(),
            ],
        },
        Category {
            name: "Characters".to_string(),
            descriptions: vec![
                "A brooding elven ranger with a troubled past".to_string(),
                "A charismatic human bard collecting epic tales".to_string(),
                "A wise dwarven cleric devoted to their deity".to_string(),
                "A mysterious tiefling sorcerer with unknown origins".to_string(),
                "A half-orc barbarian seeking redemption".to_string(),
            ],
        },
        Category {
            name: "Maps".to_string(),
            descriptions: vec![
                "A detailed map of an unexplored region".to_string(),
                "Ancient parchment showing hidden treasure locations".to_string(),
                "A tactical battle map of a historic conflict".to_string(),
                "A mystical map that reveals different locations depending on the phase of the moon".to_string(),
                "A carefully illustrated dungeon layout with notes from previous explorers".to_string(),
            ],
        },
        Category {
            name: "Monsters".to_string(),
            descriptions: vec![
                "A terrifying dragon that commands the weather".to_string(),
                "A cunning shapeshifter infiltrating society".to_string(),
                "An ancient undead creature bound to a cursed location".to_string(),
                "A massive creature lurking in the depths".to_string(),
                "A deceptively small being with immense magical powers".to_string(),
            ],
        },
    ]
});

pub struct HardcodedCategoryRepository;

impl HardcodedCategoryRepository {
    pub fn new() -> Self {
        // Verify data integrity at construction time
        debug_assert_eq!(CATEGORIES.len(), 6, "Must have exactly 6 categories");
        for category in CATEGORIES.iter() {
            debug_assert_eq!(
                category.descriptions.len(),
                5,
                "Category {} must have exactly 5 descriptions",
                category.name
            );
        }

        Self
    }
}

impl CategoryRepository for HardcodedCategoryRepository {
    // Catalog order drives the id-to-category cycle, so no sorting here
    fn get_all(&self) -> Vec<Category> {
        CATEGORIES.clone()
    }

    fn find_by_name(&self, name: &str) -> Option<Category> {
        CATEGORIES.iter().find(|c| c.name == name).cloned()
    }
}

impl Default for HardcodedCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}
