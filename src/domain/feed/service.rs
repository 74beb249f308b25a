use crate::domain::pin::{Pin, PinServiceApi};
use crate::domain::tag_filter::TagFilterEngine;
use std::sync::Arc;

/// Pagination controller for the infinitely-scrolling catalog
///
/// Owns the append-only accumulated store and the fully-recomputed
/// displayed slice. At most one page fetch is in flight at a time; scroll
/// or filter triggers arriving while one is in flight are dropped, not
/// queued. Exhaustion (`all_loaded`) is terminal for fetching only, while
/// filter recomputation keeps operating on the frozen store.
pub struct ContentFeed {
    pin_service: Arc<dyn PinServiceApi>,
    filter: TagFilterEngine,
    page: u64,
    page_size: usize,
    total_item_count: u64,
    scroll_threshold_px: u32,
    loading: bool,
    all_loaded: bool,
    category_filter: Option<String>,
    accumulated: Vec<Pin>,
    displayed: Vec<Pin>,
}

impl ContentFeed {
    pub fn new(
        pin_service: Arc<dyn PinServiceApi>,
        page_size: usize,
        total_item_count: u64,
        scroll_threshold_px: u32,
    ) -> Self {
        Self {
            pin_service,
            filter: TagFilterEngine::new(),
            page: 0,
            page_size,
            total_item_count,
            scroll_threshold_px,
            loading: false,
            all_loaded: false,
            category_filter: None,
            accumulated: Vec::new(),
            displayed: Vec::new(),
        }
    }

    /// Seed the tag universe and load the first page
    pub async fn initialize(&mut self) {
        match self.pin_service.get_all_unique_tags().await {
            Ok(tags) => self.filter.seed(tags),
            Err(err) => {
                // The universe still grows lazily as pages arrive
                tracing::warn!(error = %err, "could not seed tag universe");
            }
        }
        self.load_more().await;
    }

    /// Scroll boundary signal from the presentation layer. Fetches the next
    /// page when the viewport bottom is within the proximity threshold of
    /// the document end.
    pub async fn on_scroll(&mut self, scroll_bottom: u32, document_height: u32) {
        if self.loading || self.all_loaded {
            return;
        }
        if scroll_bottom + self.scroll_threshold_px >= document_height {
            self.load_more().await;
        }
    }

    /// Fetch the next page unless a fetch is in flight or the feed is
    /// exhausted, then backfill while the filtered view is under-filled
    pub async fn load_more(&mut self) {
        if self.loading || self.all_loaded {
            tracing::debug!(
                loading = self.loading,
                all_loaded = self.all_loaded,
                "load trigger dropped"
            );
            return;
        }
        if self.fetch_page().await {
            self.backfill().await;
        }
    }

    /// Replace the selected tag set and recompute the displayed slice
    pub async fn set_tag_filter(&mut self, tags: Vec<String>) {
        self.filter.set_selected(tags);
        self.recompute_displayed();
        self.backfill().await;
    }

    /// Select one more tag (moves it out of the available half)
    pub async fn add_tag(&mut self, tag: &str) {
        self.filter.add(tag);
        self.recompute_displayed();
        self.backfill().await;
    }

    /// Deselect a tag (returns it to the available half, re-sorted)
    pub async fn remove_tag(&mut self, tag: &str) {
        self.filter.remove(tag);
        self.recompute_displayed();
        self.backfill().await;
    }

    /// Deselect everything
    pub async fn clear_tag_filter(&mut self) {
        self.filter.clear_all();
        self.recompute_displayed();
        self.backfill().await;
    }

    /// Restrict subsequent page loads to a single category. Filtered pages
    /// come back short, so a category-scoped feed exhausts early.
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category_filter = category;
    }

    async fn fetch_page(&mut self) -> bool {
        self.loading = true;
        let offset = self.page * self.page_size as u64;
        tracing::debug!(page = self.page, offset, "loading pin page");

        match self
            .pin_service
            .get_pins(self.page_size, offset, self.category_filter.as_deref())
            .await
        {
            Ok(pins) => {
                if pins.len() < self.page_size
                    || offset + pins.len() as u64 >= self.total_item_count
                {
                    tracing::info!(page = self.page, "feed exhausted");
                    self.all_loaded = true;
                }
                self.filter.observe(&pins);
                self.accumulated.extend(pins);
                self.recompute_displayed();
                self.page += 1;
                self.loading = false;
                true
            }
            Err(err) => {
                // No retry is scheduled here; the next scroll or filter
                // trigger attempts again
                tracing::warn!(error = %err, page = self.page, "pin page load failed");
                self.loading = false;
                false
            }
        }
    }

    /// Keep fetching while the filtered view holds fewer items than one
    /// page and more data may exist. Stops at exhaustion or on a failed
    /// fetch, never loops past `all_loaded`.
    async fn backfill(&mut self) {
        if self.loading {
            return;
        }
        while self.displayed.len() < self.page_size && !self.all_loaded {
            if !self.fetch_page().await {
                break;
            }
        }
    }

    fn recompute_displayed(&mut self) {
        self.displayed = self.filter.apply(&self.accumulated);
    }

    pub fn displayed(&self) -> &[Pin] {
        &self.displayed
    }

    pub fn accumulated(&self) -> &[Pin] {
        &self.accumulated
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_all_loaded(&self) -> bool {
        self.all_loaded
    }

    pub fn available_tags(&self) -> &[String] {
        self.filter.available()
    }

    pub fn selected_tags(&self) -> &[String] {
        self.filter.selected()
    }
}
