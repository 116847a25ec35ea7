use devto_core::articles::{decode_article, format_article_details};

use crate::client::DevToClient;
use crate::error::Error;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Article ID
    pub id: String,
}

/// Fetch one article and render it with its full body.
/// A missing article surfaces as the API's 404.
pub async fn article_by_id_data(client: &DevToClient, id: &str) -> Result<String, Error> {
    let path = format!("/articles/{}", urlencoding::encode(id));
    let value = client.fetch::<serde_json::Value>(&path, &[]).await?;
    let article = decode_article(value).map_err(|e| Error::UnexpectedResponse(e.to_string()))?;

    Ok(format_article_details(article.as_ref()))
}

pub async fn article_details_data(client: &DevToClient, article_id: u64) -> Result<String, Error> {
    article_by_id_data(client, &article_id.to_string()).await
}
