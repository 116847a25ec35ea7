use devto_core::payload::{build_create_payload, created_message, WriteResponse};
use reqwest::Method;

use crate::client::DevToClient;
use crate::error::Error;

#[derive(Debug, clap::Args, Clone)]
pub struct CreateOptions {
    /// Article title
    #[arg(long)]
    pub title: String,

    /// Article content in markdown
    #[arg(long)]
    pub body: String,

    /// Comma-separated list of tags (e.g. "rust,tutorial")
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Publish immediately instead of saving a draft
    #[arg(long)]
    pub published: bool,
}

/// Create an article and return a confirmation with its ID and URL.
///
/// Title and body are checked locally before anything is sent.
pub async fn create_article_data(
    client: &DevToClient,
    title: &str,
    body_markdown: &str,
    tags: &str,
    published: bool,
) -> Result<String, Error> {
    let payload = build_create_payload(title, body_markdown, tags, published)?;
    let response: WriteResponse = client.submit(Method::POST, "/articles", &payload).await?;

    log::info!("Created article {:?}", response.id);

    Ok(created_message(&response))
}

pub async fn run(options: CreateOptions, client: &DevToClient) -> Result<String, Error> {
    create_article_data(
        client,
        &options.title,
        &options.body,
        &options.tags,
        options.published,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevToConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_article() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/articles"))
            .and(header("api-key", "secret"))
            .and(body_json(json!({
                "article": {
                    "title": "My Python Article",
                    "body_markdown": "# Python",
                    "published": false,
                    "tags": ["python", "webdev"]
                }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "id": 42, "url": "https://x/42" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            DevToClient::new(&DevToConfig::new(server.uri()).with_api_key("secret")).unwrap();
        let result = create_article_data(
            &client,
            "My Python Article",
            "# Python",
            "python,webdev",
            false,
        )
        .await
        .unwrap();

        assert!(result.contains("42"));
        assert!(result.contains("https://x/42"));
    }

    #[tokio::test]
    async fn test_create_article_empty_title_sends_nothing() {
        let server = MockServer::start().await;
        let client =
            DevToClient::new(&DevToConfig::new(server.uri()).with_api_key("secret")).unwrap();

        let err = create_article_data(&client, "", "# Python", "", false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_article_without_api_key() {
        let server = MockServer::start().await;
        let client = DevToClient::new(&DevToConfig::new(server.uri())).unwrap();

        let err = create_article_data(&client, "Title", "Body", "", true)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingApiKey));
    }

    #[tokio::test]
    async fn test_create_article_rejected_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Title can't be blank"))
            .mount(&server)
            .await;

        let client =
            DevToClient::new(&DevToConfig::new(server.uri()).with_api_key("secret")).unwrap();
        let err = create_article_data(&client, "Title", "Body", "", false)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(422));
    }
}
