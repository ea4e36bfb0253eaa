//! Posts page fetch and rendering.

use super::HarvestWorker;
use std::sync::atomic::Ordering;

impl HarvestWorker {
    /// Fetch one Posts page and render every post on it
    ///
    /// A fetch or decode failure logs the page and returns early; no
    /// decode is attempted on a failed response.
    pub(crate) async fn posts_page(&self, page: u32) {
        let listing = {
            let _slot = self.in_flight_slot().await;
            self.api.posts_page(page, self.fetch.page_size).await
        };

        let listing = match listing {
            Ok(listing) => listing,
            Err(e) => {
                self.counters
                    .post_pages_failed
                    .fetch_add(1, Ordering::Relaxed);
                tracing::warn!(page, error = %e, "failed to fetch posts page");
                return;
            }
        };

        for post in &listing.data {
            self.counters.posts_rendered.fetch_add(1, Ordering::Relaxed);
            self.sink.post(post);
        }
    }
}
