use devto_core::payload::{build_update_payload, updated_message, ArticleChanges, WriteResponse};
use reqwest::Method;

use crate::client::DevToClient;
use crate::error::Error;

#[derive(Debug, clap::Args, Clone)]
pub struct UpdateOptions {
    /// Article ID
    pub article_id: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content in markdown
    #[arg(long)]
    pub body: Option<String>,

    /// New comma-separated list of tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Change the publish status
    #[arg(long)]
    pub published: Option<bool>,
}

/// Update an article with only the fields in `changes`.
///
/// The article is fetched first so a missing ID fails with the API's 404
/// before any write is attempted. Without an API key nothing is sent.
pub async fn update_article_data(
    client: &DevToClient,
    article_id: u64,
    changes: ArticleChanges,
) -> Result<String, Error> {
    let payload = build_update_payload(&changes)?;
    client.ensure_api_key()?;
    let path = format!("/articles/{article_id}");

    let _: serde_json::Value = client.fetch(&path, &[]).await?;

    let response: WriteResponse = client.submit(Method::PUT, &path, &payload).await?;

    log::info!("Updated article {article_id}");

    Ok(updated_message(&response))
}

pub async fn run(options: UpdateOptions, client: &DevToClient) -> Result<String, Error> {
    let changes = ArticleChanges::new(
        options.title,
        options.body,
        options.tags.as_deref(),
        options.published,
    );
    update_article_data(client, options.article_id, changes).await
}
