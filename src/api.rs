//! Content API transport
//!
//! The worker reaches the remote API through the [`ContentApi`] trait so
//! tests can substitute a controllable fake. [`HttpContentApi`] is the
//! production implementation: one shared `reqwest` client carrying the
//! static `app-id` header, safe for any number of concurrent callers.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{Page, Post, User, UserId};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

/// Read access to the paginated content API
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch one page of the Users collection
    async fn users_page(&self, page: u32, limit: u32) -> Result<Page<User>>;

    /// Fetch a single user's detail record
    async fn user_detail(&self, id: &UserId) -> Result<User>;

    /// Fetch one page of the Posts collection
    async fn posts_page(&self, page: u32, limit: u32) -> Result<Page<Post>>;
}

/// HTTP implementation of [`ContentApi`] over a shared `reqwest` client
#[derive(Clone, Debug)]
pub struct HttpContentApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpContentApi {
    /// Create a new HTTP transport from the API configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the base URL or app id is malformed,
    /// or [`Error::Transport`] when the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let app_id = HeaderValue::from_str(&config.app_id).map_err(|e| Error::Config {
            message: format!("app_id is not a valid header value: {e}"),
            key: Some("app_id".to_string()),
        })?;
        let mut headers = HeaderMap::new();
        headers.insert("app-id", app_id);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .user_agent("api-harvest worker")
            .build()?;

        let base_url = Url::parse(config.base_url.trim()).map_err(|e| Error::Config {
            message: format!("invalid base_url: {e}"),
            key: Some("base_url".to_string()),
        })?;

        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL by appending path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|()| Error::Config {
                message: format!("base URL {} cannot carry path segments", self.base_url),
                key: Some("base_url".to_string()),
            })?;
            parts.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// GET a URL and decode its JSON body
    ///
    /// The status is checked before any decode is attempted; decode
    /// failures carry the operation context for diagnostics.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, u32)],
        context: String,
    ) -> Result<T> {
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { context, source })
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn users_page(&self, page: u32, limit: u32) -> Result<Page<User>> {
        let url = self.endpoint(&["user"])?;
        self.get_json(
            url,
            &[("page", page), ("limit", limit)],
            format!("users page {page}"),
        )
        .await
    }

    async fn user_detail(&self, id: &UserId) -> Result<User> {
        let url = self.endpoint(&["user", id.as_str()])?;
        self.get_json(url, &[], format!("user {id}")).await
    }

    async fn posts_page(&self, page: u32, limit: u32) -> Result<Page<Post>> {
        let url = self.endpoint(&["post"])?;
        self.get_json(
            url,
            &[("page", page), ("limit", limit)],
            format!("posts page {page}"),
        )
        .await
    }
}
