//! Error types for api-harvest
//!
//! The worker distinguishes two failure classes at the transport seam:
//! transport failures (connection, timeout, non-success status) and decode
//! failures (malformed or unexpected JSON). Both are logged with the
//! operation context and dropped at the task boundary; neither propagates
//! to sibling tasks.

use thiserror::Error;

/// Result type alias for api-harvest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for api-harvest
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "page_count")
        key: Option<String>,
    },

    /// Network-level failure (connection refused, timeout, protocol error)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Http {
        /// The HTTP status code returned by the server
        status: u16,
        /// The request URL, for diagnostics
        url: String,
    },

    /// Response body did not match the expected JSON shape
    #[error("decode error in {context}: {source}")]
    Decode {
        /// The operation and page/id the body belonged to (e.g., "users page 3")
        context: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns true for transport-class failures (network or HTTP status),
    /// false for decode and configuration errors.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Http { .. })
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(context: &str) -> Error {
        let source = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        Error::Decode {
            context: context.to_string(),
            source,
        }
    }

    #[test]
    fn config_error_display_includes_message() {
        let err = Error::Config {
            message: "page_count must be at least 1".into(),
            key: Some("page_count".into()),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: page_count must be at least 1"
        );
    }

    #[test]
    fn http_error_display_includes_status_and_url() {
        let err = Error::Http {
            status: 500,
            url: "http://api.example/user/abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("http://api.example/user/abc"));
    }

    #[test]
    fn decode_error_display_includes_context() {
        let err = decode_error("users page 3");
        assert!(err.to_string().contains("users page 3"));
    }

    #[test]
    fn http_and_transport_classify_as_transport() {
        let err = Error::Http {
            status: 404,
            url: "http://api.example/post".into(),
        };
        assert!(err.is_transport());
    }

    #[test]
    fn decode_and_config_do_not_classify_as_transport() {
        assert!(!decode_error("posts page 1").is_transport());
        assert!(
            !Error::Config {
                message: "bad".into(),
                key: None,
            }
            .is_transport()
        );
    }

    #[test]
    fn decode_error_keeps_source_chain() {
        let err = decode_error("user abc123");
        assert!(std::error::Error::source(&err).is_some());
    }
}
