mod articles;
mod users;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Error;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, ServerState, Tool};

const INSTRUCTIONS: &str = "\
Dev.to API server: browse, search, read and publish Dev.to articles.

When to use what:
- Recent content: get_latest_articles
- Popular content: get_top_articles
- Articles on a topic: get_articles_by_tag(tag)
- Keyword search in titles and descriptions: search_articles(query, page)
- Articles by an author: get_articles_by_username(username)
- Full article content: get_article_details(article_id) or get_article_by_id(id)
- Publishing: create_article(title, body_markdown, tags, published)
- Editing: update_article(article_id, title, body_markdown, tags, published)
- User profiles: get_user_info(username)

Creating and updating articles requires a Dev.to API key in the DEV_TO_API_KEY
environment variable. Keep the key secret.";

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
    pub prompts: Option<PromptsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct PromptsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    pub instructions: String,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
            prompts: Some(PromptsCapability {}),
        },
        server_info: ServerInfo {
            name: "devto".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: INSTRUCTIONS.to_string(),
    };

    to_result(result)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let mut tools = articles::definitions();
    tools.extend(users::definitions());

    to_result(ToolsList { tools })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| {
            JsonRpcError::new(JsonRpcError::INVALID_PARAMS, format!("Invalid params: {e}"))
        })?;

    let arguments = params.arguments;

    match params.name.as_str() {
        "get_latest_articles" => articles::handle_get_latest_articles(state).await,
        "get_top_articles" => articles::handle_get_top_articles(state).await,
        "get_articles_by_tag" => articles::handle_get_articles_by_tag(arguments, state).await,
        "get_article_by_id" => articles::handle_get_article_by_id(arguments, state).await,
        "search_articles" => articles::handle_search_articles(arguments, state).await,
        "get_article_details" => articles::handle_get_article_details(arguments, state).await,
        "get_articles_by_username" => {
            articles::handle_get_articles_by_username(arguments, state).await
        }
        "create_article" => articles::handle_create_article(arguments, state).await,
        "update_article" => articles::handle_update_article(arguments, state).await,
        "get_user_info" => users::handle_get_user_info(arguments, state).await,
        _ => Err(JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        )),
    }
}

/// Decode tool arguments. Missing arguments decode like an empty object.
fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = match arguments {
        None | Some(serde_json::Value::Null) => serde_json::json!({}),
        Some(value) => value,
    };

    serde_json::from_value(arguments).map_err(|e| {
        JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Invalid arguments: {e}"),
        )
    })
}

/// Wrap the outcome of a data function in the MCP text result format
fn text_result(outcome: Result<String, Error>) -> Result<serde_json::Value, JsonRpcError> {
    let text = outcome.map_err(|e| match e {
        Error::InvalidArgument(_) => JsonRpcError::new(JsonRpcError::INVALID_PARAMS, e.to_string()),
        e => JsonRpcError::new(
            JsonRpcError::INTERNAL_ERROR,
            format!("Tool execution error: {e}"),
        ),
    })?;

    to_result(CallToolResult {
        content: vec![Content::Text { text }],
        is_error: None,
    })
}

fn to_result<T: Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| {
        JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("Internal error: {e}"))
    })
}
