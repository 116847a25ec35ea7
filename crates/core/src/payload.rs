//! Request payloads for creating and updating articles
//!
//! Argument checks happen here, before anything is sent to the API.

use serde::{Deserialize, Serialize};

use crate::articles::{ArticleId, Tags};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("At least one field must be provided for update (title, body_markdown, tags, or published)")]
    NothingToUpdate,
}

/// Body of `POST /articles`
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub body_markdown: String,
    pub published: bool,
    pub tags: Vec<String>,
}

/// Body of `PUT /articles/{id}`. Fields left as `None` are not sent.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ArticleChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl ArticleChanges {
    /// Build a change set from caller arguments. `tags` is a comma-separated list.
    pub fn new(
        title: Option<String>,
        body_markdown: Option<String>,
        tags: Option<&str>,
        published: Option<bool>,
    ) -> Self {
        Self {
            title,
            body_markdown,
            tags: tags.map(|tags| Tags::parse(tags).into_vec()),
            published,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body_markdown.is_none()
            && self.tags.is_none()
            && self.published.is_none()
    }
}

#[derive(Debug, Serialize)]
struct Envelope<T> {
    article: T,
}

/// Fields of a create/update response used in confirmations
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WriteResponse {
    pub id: Option<ArticleId>,
    pub url: Option<String>,
}

/// Validate and wrap a new article as `{"article": {...}}`
pub fn build_create_payload(
    title: &str,
    body_markdown: &str,
    tags: &str,
    published: bool,
) -> Result<serde_json::Value, ArgumentError> {
    if title.trim().is_empty() {
        return Err(ArgumentError::Empty("title"));
    }
    if body_markdown.trim().is_empty() {
        return Err(ArgumentError::Empty("body_markdown"));
    }

    let article = NewArticle {
        title: title.to_string(),
        body_markdown: body_markdown.to_string(),
        published,
        tags: Tags::parse(tags).into_vec(),
    };

    Ok(serde_json::json!(Envelope { article }))
}

/// Validate and wrap a change set as `{"article": {...}}` with only the provided fields
pub fn build_update_payload(changes: &ArticleChanges) -> Result<serde_json::Value, ArgumentError> {
    if changes.is_empty() {
        return Err(ArgumentError::NothingToUpdate);
    }
    if matches!(changes.title.as_deref(), Some(title) if title.trim().is_empty()) {
        return Err(ArgumentError::Empty("title"));
    }

    Ok(serde_json::json!(Envelope { article: changes }))
}

pub fn created_message(response: &WriteResponse) -> String {
    format!(
        "Article created successfully with ID: {}\nURL: {}",
        response
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Unknown".to_string()),
        response.url.as_deref().unwrap_or("Unknown")
    )
}

pub fn updated_message(response: &WriteResponse) -> String {
    format!(
        "Article updated successfully\nURL: {}",
        response.url.as_deref().unwrap_or("Unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_create_payload() {
        let payload = build_create_payload("My Post", "# Hello", "rust, webdev", true).unwrap();

        assert_eq!(
            payload,
            json!({
                "article": {
                    "title": "My Post",
                    "body_markdown": "# Hello",
                    "published": true,
                    "tags": ["rust", "webdev"]
                }
            })
        );
    }

    #[test]
    fn test_build_create_payload_defaults() {
        let payload = build_create_payload("My Post", "# Hello", "", false).unwrap();

        assert_eq!(payload["article"]["published"], json!(false));
        assert_eq!(payload["article"]["tags"], json!([]));
    }

    #[test]
    fn test_build_create_payload_rejects_empty_title() {
        assert_eq!(
            build_create_payload("  ", "# Hello", "", false),
            Err(ArgumentError::Empty("title"))
        );
    }

    #[test]
    fn test_build_create_payload_rejects_empty_body() {
        assert_eq!(
            build_create_payload("My Post", "", "", false),
            Err(ArgumentError::Empty("body_markdown"))
        );
    }

    #[test]
    fn test_build_update_payload_only_provided_fields() {
        let changes = ArticleChanges::new(Some("New Title".to_string()), None, None, Some(true));
        let payload = build_update_payload(&changes).unwrap();

        assert_eq!(
            payload,
            json!({ "article": { "title": "New Title", "published": true } })
        );
    }

    #[test]
    fn test_build_update_payload_tags_normalized() {
        let changes = ArticleChanges::new(None, None, Some("go,  rust"), None);
        let payload = build_update_payload(&changes).unwrap();

        assert_eq!(payload, json!({ "article": { "tags": ["go", "rust"] } }));
    }

    #[test]
    fn test_build_update_payload_requires_a_field() {
        assert_eq!(
            build_update_payload(&ArticleChanges::default()),
            Err(ArgumentError::NothingToUpdate)
        );
    }

    #[test]
    fn test_build_update_payload_rejects_blank_title() {
        let changes = ArticleChanges::new(Some(String::new()), None, None, None);
        assert_eq!(
            build_update_payload(&changes),
            Err(ArgumentError::Empty("title"))
        );
    }

    #[test]
    fn test_created_message() {
        let response: WriteResponse =
            serde_json::from_value(json!({ "id": 42, "url": "https://x/42" })).unwrap();
        let message = created_message(&response);

        assert!(message.contains("42"));
        assert!(message.contains("https://x/42"));
        assert_eq!(
            message,
            "Article created successfully with ID: 42\nURL: https://x/42"
        );
    }

    #[test]
    fn test_updated_message() {
        let response = WriteResponse {
            id: None,
            url: Some("https://x/7".to_string()),
        };
        assert_eq!(
            updated_message(&response),
            "Article updated successfully\nURL: https://x/7"
        );
    }
}
