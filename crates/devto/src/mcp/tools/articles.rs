use crate::prelude::eprintln;
use devto_core::articles::ArticleId;
use devto_core::payload::ArticleChanges;
use serde::Deserialize;

use super::{parse_arguments, text_result, JsonRpcError, ServerState, Tool};

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_latest_articles".to_string(),
            description: "Get the latest articles from Dev.to. Returns up to 10 articles with title, ID, author, publish date, tags and description.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_top_articles".to_string(),
            description: "Get the most popular articles from Dev.to. Returns up to 10 articles.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_articles_by_tag".to_string(),
            description: "Get articles with a given tag from Dev.to. Returns up to 10 articles.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "tag": {
                        "type": "string",
                        "description": "Tag name (e.g., 'python', 'rust', 'webdev')"
                    }
                },
                "required": ["tag"]
            }),
        },
        Tool {
            name: "get_article_by_id".to_string(),
            description: "Get a specific article by ID from Dev.to, including its full markdown content.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Article ID (e.g., '1234')"
                    }
                },
                "required": ["id"]
            }),
        },
        Tool {
            name: "search_articles".to_string(),
            description: "Search for articles on Dev.to by keywords. Fetches one page of top articles and keeps those whose title or description contains the query (case-insensitive). Returns up to 10 matches.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search term to find in article titles and descriptions"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number of top articles to search, 1-indexed (default: 1)"
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_article_details".to_string(),
            description: "Get detailed information about a specific article, including its full markdown content and metadata.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "article_id": {
                        "type": "number",
                        "description": "The ID of the article to retrieve"
                    }
                },
                "required": ["article_id"]
            }),
        },
        Tool {
            name: "get_articles_by_username".to_string(),
            description: "Get articles written by a specific Dev.to user. Returns up to 10 articles.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "username": {
                        "type": "string",
                        "description": "The username of the author"
                    }
                },
                "required": ["username"]
            }),
        },
        Tool {
            name: "create_article".to_string(),
            description: "Create a new article on Dev.to. Saved as a draft unless published is true. Requires the DEV_TO_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The title of the article"
                    },
                    "body_markdown": {
                        "type": "string",
                        "description": "The content of the article in markdown format"
                    },
                    "tags": {
                        "type": "string",
                        "description": "Comma-separated list of tags (e.g., 'python,tutorial,webdev')"
                    },
                    "published": {
                        "type": "boolean",
                        "description": "Publish immediately (true) or save as draft (false, default)"
                    }
                },
                "required": ["title", "body_markdown"]
            }),
        },
        Tool {
            name: "update_article".to_string(),
            description: "Update an existing article on Dev.to. Only the fields provided are changed. Requires the DEV_TO_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "article_id": {
                        "type": "number",
                        "description": "The ID of the article to update"
                    },
                    "title": {
                        "type": "string",
                        "description": "New title for the article"
                    },
                    "body_markdown": {
                        "type": "string",
                        "description": "New content in markdown format"
                    },
                    "tags": {
                        "type": "string",
                        "description": "New comma-separated list of tags"
                    },
                    "published": {
                        "type": "boolean",
                        "description": "Change publish status"
                    }
                },
                "required": ["article_id"]
            }),
        },
    ]
}

pub async fn handle_get_latest_articles(
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    if state.global.verbose {
        eprintln!("Calling get_latest_articles");
    }

    text_result(crate::articles::latest_articles_data(&state.client).await)
}

pub async fn handle_get_top_articles(
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    if state.global.verbose {
        eprintln!("Calling get_top_articles");
    }

    text_result(crate::articles::top_articles_data(&state.client).await)
}

pub async fn handle_get_articles_by_tag(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct TagArgs {
        tag: String,
    }

    let args: TagArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_articles_by_tag: tag={}", args.tag);
    }

    text_result(crate::articles::articles_by_tag_data(&state.client, &args.tag).await)
}

pub async fn handle_get_article_by_id(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ArticleByIdArgs {
        id: ArticleId,
    }

    let args: ArticleByIdArgs = parse_arguments(arguments)?;
    let id = args.id.to_string();

    if state.global.verbose {
        eprintln!("Calling get_article_by_id: id={id}");
    }

    text_result(crate::articles::article_by_id_data(&state.client, &id).await)
}

pub async fn handle_search_articles(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchArgs {
        query: String,
        page: Option<u32>,
    }

    let args: SearchArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!(
            "Calling search_articles: query={}, page={:?}",
            args.query, args.page
        );
    }

    text_result(
        crate::articles::search_articles_data(&state.client, &args.query, args.page.unwrap_or(1))
            .await,
    )
}

pub async fn handle_get_article_details(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ArticleDetailsArgs {
        article_id: u64,
    }

    let args: ArticleDetailsArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_article_details: article_id={}", args.article_id);
    }

    text_result(crate::articles::article_details_data(&state.client, args.article_id).await)
}

pub async fn handle_get_articles_by_username(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UsernameArgs {
        username: String,
    }

    let args: UsernameArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_articles_by_username: username={}", args.username);
    }

    text_result(crate::articles::articles_by_username_data(&state.client, &args.username).await)
}

pub async fn handle_create_article(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateArticleArgs {
        title: String,
        body_markdown: String,
        tags: Option<String>,
        published: Option<bool>,
    }

    let args: CreateArticleArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!(
            "Calling create_article: title={}, tags={:?}, published={:?}",
            args.title, args.tags, args.published
        );
    }

    text_result(
        crate::articles::create_article_data(
            &state.client,
            &args.title,
            &args.body_markdown,
            args.tags.as_deref().unwrap_or_default(),
            args.published.unwrap_or(false),
        )
        .await,
    )
}

pub async fn handle_update_article(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UpdateArticleArgs {
        article_id: u64,
        title: Option<String>,
        body_markdown: Option<String>,
        tags: Option<String>,
        published: Option<bool>,
    }

    let args: UpdateArticleArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!(
            "Calling update_article: article_id={}, title={:?}, tags={:?}, published={:?}",
            args.article_id, args.title, args.tags, args.published
        );
    }

    let changes = ArticleChanges::new(
        args.title,
        args.body_markdown,
        args.tags.as_deref(),
        args.published,
    );

    text_result(crate::articles::update_article_data(&state.client, args.article_id, changes).await)
}
