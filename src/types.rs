//! Wire types for the content API
//!
//! Everything here is transient: page rows exist only long enough to
//! trigger a detail fetch, and detail/post records only long enough to be
//! rendered. Nothing is cached or aggregated across pages.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
///
/// The API uses opaque hex strings as ids; the newtype keeps them from
/// being confused with other string parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new UserId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user record
///
/// Page rows and detail records share this shape; the list endpoint and
/// the detail endpoint return the same fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user id
    pub id: UserId,
    /// Honorific title ("mr", "ms", ...)
    pub title: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Self-reported gender
    pub gender: String,
}

/// Author fields embedded in a post
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOwner {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

/// A post record from a page response
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post body text
    pub text: String,
    /// Ordered tag list
    pub tags: Vec<String>,
    /// Publish timestamp, kept as the raw wire string so it renders verbatim
    pub publish_date: String,
    /// Like count
    pub likes: u64,
    /// Embedded author name
    pub owner: PostOwner,
}

/// Paginated response envelope: `{ "data": [...] }`
///
/// The live API also reports `total`/`page`/`limit`; the worker ignores
/// them, but they are decoded when present for diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    /// The page's rows
    pub data: Vec<T>,
    /// Total row count across all pages, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// The page index this response covers, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// The page size this response covers, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const USERS_PAGE: &str = r#"{
        "data": [
            {
                "id": "60d0fe4f5311236168a109ca",
                "title": "ms",
                "firstName": "Sara",
                "lastName": "Andersen",
                "email": "sara.andersen@example.com",
                "gender": "female",
                "picture": "https://example.com/sara.jpg"
            }
        ],
        "total": 99,
        "page": 1,
        "limit": 10
    }"#;

    const POSTS_PAGE: &str = r#"{
        "data": [
            {
                "id": "60d21b4667d0d8992e610c85",
                "text": "adorable animal",
                "tags": ["animal", "dog", "golden retriever"],
                "publishDate": "2020-05-24T14:53:17.598Z",
                "likes": 43,
                "owner": {
                    "id": "60d0fe4f5311236168a109ca",
                    "firstName": "Sara",
                    "lastName": "Andersen"
                }
            }
        ],
        "total": 804
    }"#;

    #[test]
    fn users_page_decodes_camel_case_and_ignores_unknown_fields() {
        let page: Page<User> = serde_json::from_str(USERS_PAGE).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, Some(99));
        assert_eq!(page.page, Some(1));
        assert_eq!(page.limit, Some(10));

        let user = &page.data[0];
        assert_eq!(user.id.as_str(), "60d0fe4f5311236168a109ca");
        assert_eq!(user.first_name, "Sara");
        assert_eq!(user.last_name, "Andersen");
        assert_eq!(user.email, "sara.andersen@example.com");
        assert_eq!(user.gender, "female");
    }

    #[test]
    fn posts_page_decodes_tags_in_order_and_keeps_date_raw() {
        let page: Page<Post> = serde_json::from_str(POSTS_PAGE).unwrap();
        let post = &page.data[0];
        assert_eq!(post.tags, vec!["animal", "dog", "golden retriever"]);
        assert_eq!(post.publish_date, "2020-05-24T14:53:17.598Z");
        assert_eq!(post.likes, 43);
        assert_eq!(post.owner.first_name, "Sara");
    }

    #[test]
    fn page_envelope_without_bookkeeping_fields_decodes() {
        let page: Page<User> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, None);
    }

    #[test]
    fn missing_required_user_field_is_a_decode_error() {
        let result = serde_json::from_str::<User>(r#"{"id": "abc", "title": "mr"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_id_is_serde_transparent() {
        let id: UserId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(id, UserId::new("abc123"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc123""#);
    }

    #[test]
    fn user_id_display_matches_inner() {
        let id = UserId::from("60d0fe4f5311236168a109ca");
        assert_eq!(id.to_string(), "60d0fe4f5311236168a109ca");
    }
}
