//! Pure transformation functions for Dev.to article payloads
//!
//! This module contains zero I/O operations and is fully testable with fixture data.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Maximum number of articles rendered by any list operation.
pub const MAX_RESULTS: usize = 10;

pub const NO_ARTICLES: &str = "No articles found.";
pub const ARTICLE_NOT_FOUND: &str = "Article not found.";

const UNTITLED: &str = "Untitled";
const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_DATE: &str = "Unknown date";
const NO_DESCRIPTION: &str = "No description available.";
const NO_CONTENT: &str = "No content available.";

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

/// Article identifier. The API sends numbers, fixtures and callers sometimes strings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(id) => write!(f, "{id}"),
            ArticleId::Text(id) => f.write_str(id),
        }
    }
}

/// Ordered list of tag names.
///
/// Dev.to is inconsistent about the shape of tags: list endpoints send
/// `tag_list` as an array and `tags` as a comma-separated string, while the
/// single article endpoint does the opposite. Both shapes decode into the
/// same normalized list.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Parse a comma-separated tag string, trimming names and dropping empty entries.
    pub fn parse(text: &str) -> Self {
        text.split(',').collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Tags(
            iter.into_iter()
                .map(|tag| tag.as_ref().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTags {
            List(Vec<String>),
            Text(String),
        }

        Ok(match Option::<RawTags>::deserialize(deserializer)? {
            Some(RawTags::List(items)) => items.into_iter().collect(),
            Some(RawTags::Text(text)) => Tags::parse(&text),
            None => Tags::default(),
        })
    }
}

/// Author reference embedded in an article
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ArticleUser {
    pub name: Option<String>,
    pub username: Option<String>,
}

/// Article as returned by the `/articles` endpoints
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body_markdown: Option<String>,
    pub readable_publish_date: Option<String>,
    pub url: Option<String>,
    pub published: Option<bool>,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub tag_list: Tags,
    pub user: Option<ArticleUser>,
}

impl Article {
    /// Tags of the article, whichever of the two tag fields carries them.
    pub fn tags(&self) -> &Tags {
        if self.tags.is_empty() {
            &self.tag_list
        } else {
            &self.tags
        }
    }

    fn author(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| present(&user.name))
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    fn id_text(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Returns the field value unless it is missing or blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a list response. A `null` body is an empty list.
pub fn decode_articles(value: serde_json::Value) -> Result<Vec<Article>, serde_json::Error> {
    Ok(serde_json::from_value::<Option<Vec<Article>>>(value)?.unwrap_or_default())
}

/// Decode a single article response. `null` and `{}` mean there is no article.
pub fn decode_article(value: serde_json::Value) -> Result<Option<Article>, serde_json::Error> {
    if is_blank(&value) {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

pub(crate) fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

// ============================================================================
// Pure Transformation Functions
// ============================================================================

/// Keep the first [`MAX_RESULTS`] articles.
pub fn cap_results(mut articles: Vec<Article>) -> Vec<Article> {
    articles.truncate(MAX_RESULTS);
    articles
}

/// Keep articles whose title or description contains `query`, ignoring case.
///
/// This is a plain substring match: "py" matches "Python Tips".
pub fn filter_articles(articles: Vec<Article>, query: &str) -> Vec<Article> {
    let needle = query.to_lowercase();

    articles
        .into_iter()
        .filter(|article| {
            let title = article.title.as_deref().unwrap_or_default().to_lowercase();
            let description = article
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            title.contains(&needle) || description.contains(&needle)
        })
        .collect()
}

/// Render a list of articles as Markdown
pub fn format_articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return NO_ARTICLES.to_string();
    }

    let mut result = String::from("# Dev.to Articles\n\n");

    for article in articles {
        result.push_str(&format!(
            "## {}\n",
            present(&article.title).unwrap_or(UNTITLED)
        ));
        result.push_str(&format!("ID: {}\n", article.id_text()));
        result.push_str(&format!("Author: {}\n", article.author()));
        result.push_str(&format!(
            "Published: {}\n",
            present(&article.readable_publish_date).unwrap_or(UNKNOWN_DATE)
        ));
        result.push_str(&format!("Tags: {}\n", article.tags()));
        result.push_str(&format!(
            "Description: {}\n\n",
            present(&article.description).unwrap_or(NO_DESCRIPTION)
        ));
    }

    result
}

/// Render a single article with its full body
pub fn format_article_details(article: Option<&Article>) -> String {
    let Some(article) = article else {
        return ARTICLE_NOT_FOUND.to_string();
    };

    let mut result = format!("# {}\n\n", present(&article.title).unwrap_or(UNTITLED));
    result.push_str(&format!("Author: {}\n", article.author()));
    result.push_str(&format!(
        "Published: {}\n",
        present(&article.readable_publish_date).unwrap_or(UNKNOWN_DATE)
    ));
    result.push_str(&format!("Tags: {}\n", article.tags()));
    if let Some(url) = present(&article.url) {
        result.push_str(&format!("URL: {url}\n"));
    }
    result.push_str("\n## Content\n\n");
    result.push_str(present(&article.body_markdown).unwrap_or(NO_CONTENT));

    result
}
