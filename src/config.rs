//! Configuration types for api-harvest

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote API configuration (endpoint, identification, timeouts)
///
/// Groups settings describing the content API the worker talks to.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API (default: the public demo API)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application id sent as the `app-id` header on every request
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: default_app_id(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Fetch behavior configuration (page range, fan-out shape)
///
/// Groups settings controlling how many pages are walked and how the
/// concurrent fan-out is shaped. Used as a nested sub-config within
/// [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Number of pages to fetch from each collection (default: 10)
    #[serde(default = "default_page_count")]
    pub page_count: u32,

    /// Rows requested per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Fetch Users pages as spawned tasks like Posts pages (default: false)
    ///
    /// The default keeps the historical shape: the driver loop blocks on
    /// each Users page while Posts pages run as tasks. Enabling this makes
    /// both collections symmetric.
    #[serde(default)]
    pub symmetric_pages: bool,

    /// Cap on simultaneous in-flight requests (None = unbounded)
    ///
    /// Unbounded matches the historical behavior of launching every page
    /// and every per-user detail request immediately.
    #[serde(default)]
    pub max_in_flight: Option<usize>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_count: default_page_count(),
            page_size: default_page_size(),
            symmetric_pages: false,
            max_in_flight: None,
        }
    }
}

impl FetchConfig {
    /// Validate the fetch settings
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the offending key when a setting
    /// is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.page_count < 1 {
            return Err(Error::Config {
                message: "page_count must be at least 1".to_string(),
                key: Some("page_count".to_string()),
            });
        }
        if self.page_size < 1 {
            return Err(Error::Config {
                message: "page_size must be at least 1".to_string(),
                key: Some("page_size".to_string()),
            });
        }
        if self.max_in_flight == Some(0) {
            return Err(Error::Config {
                message: "max_in_flight must be at least 1 when set".to_string(),
                key: Some("max_in_flight".to_string()),
            });
        }
        Ok(())
    }
}

/// Main configuration for the fetch worker
///
/// Fields are organized into logical sub-configs:
/// - [`api`](ApiConfig) - endpoint, identification, timeouts
/// - [`fetch`](FetchConfig) - page range and fan-out shape
///
/// Sub-config fields are flattened for serialization, so the JSON/TOML
/// format stays flat (no nesting).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(flatten)]
    pub api: ApiConfig,

    /// Fetch behavior settings
    #[serde(flatten)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the offending key when a setting
    /// is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config {
                message: "base_url must not be empty".to_string(),
                key: Some("base_url".to_string()),
            });
        }
        self.fetch.validate()
    }
}

fn default_base_url() -> String {
    "https://dummyapi.io/data/v1".to_string()
}

fn default_app_id() -> String {
    "6671681cbcf0d740072e040b".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_page_count() -> u32 {
    10
}

fn default_page_size() -> u32 {
    10
}
