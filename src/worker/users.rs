//! Users page fetch and per-user detail fan-out.

use super::HarvestWorker;
use crate::types::UserId;
use std::sync::atomic::Ordering;
use tokio::task::JoinSet;

impl HarvestWorker {
    /// Fetch one Users page and fan out a detail fetch per returned user
    ///
    /// Does not return until every spawned detail task has finished. A
    /// fetch or decode failure logs the page and returns without
    /// processing a partial list.
    pub(crate) async fn users_page(&self, page: u32) {
        let listing = {
            // The slot covers only the page request; detail tasks acquire
            // their own. Holding it across the inner barrier would
            // deadlock a cap of 1.
            let _slot = self.in_flight_slot().await;
            self.api.users_page(page, self.fetch.page_size).await
        };

        let listing = match listing {
            Ok(listing) => listing,
            Err(e) => {
                self.counters
                    .user_pages_failed
                    .fetch_add(1, Ordering::Relaxed);
                tracing::warn!(page, error = %e, "failed to fetch users page");
                return;
            }
        };

        let mut details: JoinSet<()> = JoinSet::new();
        for user in listing.data {
            let worker = self.clone();
            details.spawn(async move { worker.user_detail(user.id).await });
        }

        // Page-local barrier: the page completes only after every one of
        // its detail tasks has.
        while let Some(joined) = details.join_next().await {
            if let Err(e) = joined {
                tracing::error!(page, error = %e, "user detail task panicked");
            }
        }
    }

    /// Fetch one user's detail record and render it
    ///
    /// On failure the id is logged and no output is produced for it.
    pub(crate) async fn user_detail(&self, id: UserId) {
        let _slot = self.in_flight_slot().await;

        match self.api.user_detail(&id).await {
            Ok(user) => {
                self.counters.users_rendered.fetch_add(1, Ordering::Relaxed);
                self.sink.user_detail(&user);
            }
            Err(e) => {
                self.counters
                    .user_details_failed
                    .fetch_add(1, Ordering::Relaxed);
                tracing::warn!(user_id = %id, error = %e, "failed to fetch user detail");
            }
        }
    }
}
