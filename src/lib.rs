//! # api-harvest
//!
//! Concurrent paginated fetch worker for REST content APIs.
//!
//! ## Design Philosophy
//!
//! api-harvest is designed to be:
//! - **Library-first** - the worker is an embeddable crate; the bundled
//!   binary is a thin driver over it
//! - **Seam-friendly** - the transport and the output sink are trait
//!   objects, so tests and embedders can substitute their own
//! - **Failure-isolating** - a single failing request is logged and
//!   dropped; it never aborts sibling fetches or the run
//!
//! ## Quick Start
//!
//! ```no_run
//! use api_harvest::{Config, ConsoleSink, HarvestWorker, HttpContentApi};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = HttpContentApi::new(&config.api)?;
//!     let worker = HarvestWorker::new(Arc::new(api), Arc::new(ConsoleSink), config.fetch)?;
//!
//!     let stats = worker.run().await;
//!     println!(
//!         "fetched {} users and {} posts",
//!         stats.users_rendered, stats.posts_rendered
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Content API transport seam
pub mod api;
/// Command table and dispatcher
pub mod command;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Output rendering
pub mod render;
/// Wire types
pub mod types;
/// The concurrent fetch worker
pub mod worker;

// Re-export commonly used types
pub use api::{ContentApi, HttpContentApi};
pub use config::{ApiConfig, Config, FetchConfig};
pub use error::{Error, Result};
pub use render::{ConsoleSink, ReportSink, format_post_block, format_user_line};
pub use types::{Page, Post, PostOwner, User, UserId};
pub use worker::{HarvestStats, HarvestWorker};
