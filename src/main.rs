use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dnddb_core::domain::catalog::CategoryRepository;
use dnddb_core::domain::feed::ContentFeed;
use dnddb_core::domain::pin::{PinService, PinServiceApi};
use dnddb_core::infrastructure::config::{Config, LogFormat};
use dnddb_core::infrastructure::repositories::{
    HardcodedCategoryRepository, PicsumImageRepository,
};

// All mutation happens on one logical thread; the current-thread runtime
// keeps "async" completions as interleaved callbacks, never parallelism.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        page_size = config.page_size,
        total_item_count = config.total_item_count,
        "Starting DnDDB catalog core"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let category_repo = Arc::new(HardcodedCategoryRepository::new());
    let category_names: Vec<String> = category_repo
        .get_all()
        .into_iter()
        .map(|c| c.name)
        .collect();
    let image_repo = Arc::new(PicsumImageRepository::new(
        &category_names,
        config.image_cache_seed_count,
        config.image_url_max_attempts,
    ));

    // 2. Instantiate services (inject repositories)
    let pin_service = Arc::new(PinService::new(
        category_repo.clone(),
        image_repo.clone(),
        config.total_item_count,
    ));

    // 3. Instantiate the feed controller (inject services)
    let mut feed = ContentFeed::new(
        pin_service.clone(),
        config.page_size,
        config.total_item_count,
        config.scroll_threshold_px,
    );

    // Simulated browse session standing in for the presentation layer
    feed.initialize().await;
    tracing::info!(
        accumulated = feed.accumulated().len(),
        displayed = feed.displayed().len(),
        "initial page loaded"
    );

    // The user scrolls close to the bottom of the document
    feed.on_scroll(1700, 1900).await;
    tracing::info!(accumulated = feed.accumulated().len(), "scrolled");

    // The user narrows the view down to campaign-ready material
    feed.add_tag("RPG").await;
    feed.add_tag("Campaign").await;
    tracing::info!(
        displayed = feed.displayed().len(),
        selected = ?feed.selected_tags(),
        all_loaded = feed.is_all_loaded(),
        "tag filter applied"
    );

    feed.clear_tag_filter().await;
    tracing::info!(displayed = feed.displayed().len(), "filter cleared");

    // A direct single-pin lookup, as the detail view would issue
    if let Some(pin) = pin_service.get_pin(3).await? {
        tracing::info!(pin = %serde_json::to_string(&pin)?, "single pin lookup");
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dnddb_core=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dnddb_core=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
