//! The concurrent fetch worker, split into focused submodules.
//!
//! - [`users`] - Users page fetch and per-user detail fan-out
//! - [`posts`] - Posts page fetch and rendering
//!
//! The worker walks a fixed page range. Posts pages always run as spawned
//! tasks tracked by an outer barrier; Users pages block the driver loop by
//! default (the historical shape) or run as tasks when
//! `symmetric_pages` is set. Every Users page fans out one detail task per
//! returned user under a page-local barrier, and the page task completes
//! only after that inner barrier drains. `run` returns once the outer
//! barrier, and therefore every transitively spawned task, has finished.

mod posts;
mod users;


use crate::api::ContentApi;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::render::ReportSink;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;

/// Shared atomic tallies updated by every task
#[derive(Debug, Default)]
pub(crate) struct HarvestCounters {
    pub(crate) users_rendered: AtomicU64,
    pub(crate) user_details_failed: AtomicU64,
    pub(crate) user_pages_failed: AtomicU64,
    pub(crate) posts_rendered: AtomicU64,
    pub(crate) post_pages_failed: AtomicU64,
}

/// Snapshot of the tallies after a completed run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// User detail records fetched and rendered
    pub users_rendered: u64,
    /// Per-user detail fetches that failed
    pub user_details_failed: u64,
    /// Users pages that failed to fetch or decode
    pub user_pages_failed: u64,
    /// Posts rendered from successfully fetched pages
    pub posts_rendered: u64,
    /// Posts pages that failed to fetch
    pub post_pages_failed: u64,
}

/// The paginated fetch worker (cloneable - all shared state is Arc-wrapped)
///
/// Clones share the transport, the sink, the optional in-flight limiter
/// and the tallies, so spawned tasks carry a clone of the whole worker.
#[derive(Clone)]
pub struct HarvestWorker {
    pub(crate) api: Arc<dyn ContentApi>,
    pub(crate) sink: Arc<dyn ReportSink>,
    pub(crate) fetch: FetchConfig,
    pub(crate) limiter: Option<Arc<Semaphore>>,
    pub(crate) counters: Arc<HarvestCounters>,
}

impl HarvestWorker {
    /// Create a new worker over the given transport and sink
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] when the fetch settings are out of
    /// range.
    pub fn new(
        api: Arc<dyn ContentApi>,
        sink: Arc<dyn ReportSink>,
        fetch: FetchConfig,
    ) -> Result<Self> {
        fetch.validate()?;
        let limiter = fetch
            .max_in_flight
            .map(|cap| Arc::new(Semaphore::new(cap)));

        Ok(Self {
            api,
            sink,
            fetch,
            limiter,
            counters: Arc::new(HarvestCounters::default()),
        })
    }

    /// Walk every page of both collections and return the final tallies
    ///
    /// Does not return until every spawned task (including the per-user
    /// detail fetches nested under each Users page) has finished.
    /// Individual fetch failures are logged and counted; they never abort
    /// sibling tasks or the run.
    pub async fn run(&self) -> HarvestStats {
        let mut pages: JoinSet<()> = JoinSet::new();

        for page in 1..=self.fetch.page_count {
            if self.fetch.symmetric_pages {
                let worker = self.clone();
                pages.spawn(async move { worker.users_page(page).await });
            } else {
                self.users_page(page).await;
            }

            let worker = self.clone();
            pages.spawn(async move { worker.posts_page(page).await });
        }

        // Outer barrier. Users pages joined here have already drained
        // their own detail barriers.
        while let Some(joined) = pages.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "page task panicked");
            }
        }

        self.stats()
    }

    /// Snapshot the shared tallies
    pub fn stats(&self) -> HarvestStats {
        HarvestStats {
            users_rendered: self.counters.users_rendered.load(Ordering::Relaxed),
            user_details_failed: self.counters.user_details_failed.load(Ordering::Relaxed),
            user_pages_failed: self.counters.user_pages_failed.load(Ordering::Relaxed),
            posts_rendered: self.counters.posts_rendered.load(Ordering::Relaxed),
            post_pages_failed: self.counters.post_pages_failed.load(Ordering::Relaxed),
        }
    }

    /// Acquire an in-flight slot when a cap is configured
    ///
    /// Returns `None` when the worker is uncapped. The semaphore is never
    /// closed while the worker runs.
    pub(crate) async fn in_flight_slot(&self) -> Option<OwnedSemaphorePermit> {
        match &self.limiter {
            Some(limiter) => limiter.clone().acquire_owned().await.ok(),
            None => None,
        }
    }
}
