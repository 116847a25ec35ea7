use devto_core::articles::{cap_results, decode_articles, filter_articles, format_articles, Article};

use crate::client::DevToClient;
use crate::error::Error;

#[derive(Debug, clap::Args, Clone)]
pub struct TagOptions {
    /// Tag name (e.g. "rust")
    pub tag: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct UsernameOptions {
    /// Username of the author
    pub username: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Text to look for in titles and descriptions
    pub query: String,

    /// Page of top articles to search (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

async fn fetch_articles(
    client: &DevToClient,
    path: &str,
    query: &[(&str, String)],
) -> Result<Vec<Article>, Error> {
    let value = client.fetch::<serde_json::Value>(path, query).await?;
    decode_articles(value).map_err(|e| Error::UnexpectedResponse(e.to_string()))
}

/// Latest articles, newest first
pub async fn latest_articles_data(client: &DevToClient) -> Result<String, Error> {
    let articles = fetch_articles(client, "/articles/latest", &[]).await?;
    Ok(format_articles(&cap_results(articles)))
}

/// Most popular articles
pub async fn top_articles_data(client: &DevToClient) -> Result<String, Error> {
    let articles = fetch_articles(client, "/articles", &[]).await?;
    Ok(format_articles(&cap_results(articles)))
}

pub async fn articles_by_tag_data(client: &DevToClient, tag: &str) -> Result<String, Error> {
    let articles = fetch_articles(client, "/articles", &[("tag", tag.to_string())]).await?;
    Ok(format_articles(&cap_results(articles)))
}

pub async fn articles_by_username_data(
    client: &DevToClient,
    username: &str,
) -> Result<String, Error> {
    let articles =
        fetch_articles(client, "/articles", &[("username", username.to_string())]).await?;
    Ok(format_articles(&cap_results(articles)))
}

/// Search one page of the top articles listing.
///
/// The API has no search endpoint, so matching on title and description is
/// done locally after the page is fetched.
pub async fn search_articles_data(
    client: &DevToClient,
    query: &str,
    page: u32,
) -> Result<String, Error> {
    let articles = fetch_articles(client, "/articles", &[("page", page.to_string())]).await?;
    Ok(format_articles(&cap_results(filter_articles(articles, query))))
}
