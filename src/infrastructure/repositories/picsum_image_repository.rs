use super::image_repository::ImageRepository;
use parking_lot::Mutex;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Picsum photo IDs that look fantasy-themed
const FANTASY_PHOTO_IDS: [&str; 47] = [
    "1060", "1082", "110", "119", "129", "137", "158", "167", "175", "195", "204", "211", "219",
    "237", "24", "244", "256", "27", "279", "287", "301", "306", "314", "329", "346", "386", "397",
    "428", "429", "445", "452", "464", "473", "497", "54", "579", "59", "65", "652", "716", "784",
    "810", "823", "838", "87", "96", "986",
];

/// Catch-all cache bucket for categories without one of their own
const DEFAULT_BUCKET: &str = "default";

/// Allocates picsum.photos URLs, keeping them distinct across the whole
/// process for as long as the candidate space allows.
///
/// Each category gets a pre-seeded cache of candidate URLs; once a
/// category's cache is spent, fresh URLs are synthesized from a random
/// photo id and per-category dimensions, retrying on collision up to
/// `max_attempts` before accepting a duplicate as a degraded outcome.
pub struct PicsumImageRepository {
    cache: Mutex<HashMap<String, Vec<String>>>,
    used_urls: Mutex<HashSet<String>>,
    max_attempts: u32,
}

impl PicsumImageRepository {
    pub fn new(category_names: &[String], seed_count: usize, max_attempts: u32) -> Self {
        let mut rng = rand::thread_rng();
        let mut cache: HashMap<String, Vec<String>> = HashMap::new();

        for name in category_names
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(DEFAULT_BUCKET))
        {
            let urls = (0..seed_count).map(|_| random_url(name, &mut rng)).collect();
            cache.insert(name.to_string(), urls);
        }

        Self {
            cache: Mutex::new(cache),
            used_urls: Mutex::new(HashSet::new()),
            max_attempts,
        }
    }

    fn synthesize_url(
        &self,
        category: &str,
        pin_id: Option<u64>,
        used: &HashSet<String>,
        rng: &mut impl Rng,
    ) -> String {
        let mut url = random_url(category, rng);
        let mut attempt = 1;
        while used.contains(&url) && attempt < self.max_attempts {
            url = random_url(category, rng);
            attempt += 1;
        }
        if used.contains(&url) {
            // Degraded, not fatal: the candidate space is finite
            tracing::warn!(
                category = %category,
                pin_id = ?pin_id,
                attempts = self.max_attempts,
                "image url retry budget exhausted, handing out a duplicate"
            );
        }
        url
    }
}

impl ImageRepository for PicsumImageRepository {
    fn allocate(&self, category: &str, id: Option<u64>) -> String {
        let mut rng = rand::thread_rng();
        let mut used = self.used_urls.lock();
        let cache = self.cache.lock();

        if let Some(candidates) = cache.get(category) {
            let fresh: Vec<&String> = candidates.iter().filter(|u| !used.contains(*u)).collect();
            if !fresh.is_empty() {
                let url = fresh[rng.gen_range(0..fresh.len())].clone();
                used.insert(url.clone());
                return url;
            }
        }

        let url = self.synthesize_url(category, id, &used, &mut rng);
        used.insert(url.clone());
        url
    }
}

fn random_url(category: &str, rng: &mut impl Rng) -> String {
    let photo_id = FANTASY_PHOTO_IDS[rng.gen_range(0..FANTASY_PHOTO_IDS.len())];
    let (width, height) = dimensions_for(category, rng);
    format!("https://picsum.photos/id/{}/{}/{}", photo_id, width, height)
}

// Landscape for places, near-square for maps, a tighter box for items,
// a default range for everything else
fn dimensions_for(category: &str, rng: &mut impl Rng) -> (u32, u32) {
    match category {
        "Locations" => (rng.gen_range(420..=520), rng.gen_range(260..=340)),
        "Maps" => (rng.gen_range(380..=440), rng.gen_range(380..=440)),
        "Items" => (rng.gen_range(220..=320), rng.gen_range(220..=320)),
        _ => (rng.gen_range(360..=460), rng.gen_range(360..=460)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repository() -> PicsumImageRepository {
        let names: Vec<String> = ["Spells", "Locations", "Items", "Characters", "Maps", "Monsters"]
            .iter()
            .map(|n| n.to_string())
            .collect();
        PicsumImageRepository::new(&names, 5, 12)
    }

    fn parse_dimensions(url: &str) -> (u32, u32) {
        let mut parts = url.rsplit('/');
        let height = parts.next().unwrap().parse().unwrap();
        let width = parts.next().unwrap().parse().unwrap();
        (width, height)
    }

    #[test]
    fn test_allocations_stay_distinct_within_the_budget() {
        let repo = repository();
        let mut seen = HashSet::new();
        for _ in 0..60 {
            assert!(seen.insert(repo.allocate("Maps", None)));
        }
    }

    #[test]
    fn test_cache_hits_come_from_the_preseeded_pool() {
        let repo = repository();
        let seeded: Vec<String> = repo.cache.lock().get("Spells").unwrap().clone();
        let url = repo.allocate("Spells", Some(3));
        assert!(seeded.contains(&url));
    }

    #[test]
    fn test_unknown_category_synthesizes_a_url() {
        let repo = repository();
        let url = repo.allocate("Starships", None);
        assert!(url.starts_with("https://picsum.photos/id/"));
    }

    #[test]
    fn test_dimensions_follow_the_category_ranges() {
        let repo = repository();
        for _ in 0..20 {
            let (w, h) = parse_dimensions(&repo.allocate("Locations", None));
            assert!((420..=520).contains(&w) && (260..=340).contains(&h));

            let (w, h) = parse_dimensions(&repo.allocate("Items", None));
            assert!((220..=320).contains(&w) && (220..=320).contains(&h));
        }
    }

    #[test]
    fn test_allocation_is_bounded_even_with_a_minimal_budget() {
        // max_attempts = 1: a collision would be accepted immediately
        // instead of looping, so allocation always returns
        let repo = PicsumImageRepository::new(&[], 0, 1);
        let url = repo.allocate("Spells", None);
        assert!(url.starts_with("https://picsum.photos/id/"));
        assert_eq!(repo.used_urls.lock().len(), 1);
    }
}
