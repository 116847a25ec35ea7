mod cli;
mod prompts;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::client::DevToClient;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything a request handler needs, shared by all requests of a server run
pub struct ServerState {
    pub global: crate::Global,
    pub client: DevToClient,
}

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, client: DevToClient, global: crate::Global) -> Result<()> {
    let state = ServerState { global, client };

    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(state).await,
        cli::Commands::Sse(options) => sse::run_sse(options, state).await,
    }
}

/// Handle one JSON-RPC message.
///
/// Returns `None` for notifications, which never get a response.
pub async fn handle_request(request_str: &str, state: &ServerState) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError::new(
                    JsonRpcError::PARSE_ERROR,
                    format!("Parse error: {e}"),
                )),
            });
        }
    };

    if request.id.is_none() {
        log::debug!("Notification received: {}", request.method);
        return None;
    }

    let result = if request.jsonrpc != "2.0" {
        Err(JsonRpcError::new(
            JsonRpcError::INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", request.jsonrpc),
        ))
    } else {
        match request.method.as_str() {
            "initialize" => tools::handle_initialize(),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => tools::handle_tools_list(),
            "tools/call" => tools::handle_tools_call(request.params, state).await,
            "prompts/list" => prompts::handle_prompts_list(),
            "prompts/get" => prompts::handle_prompts_get(request.params, state),
            method => Err(JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            )),
        }
    };

    Some(match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevToConfig;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(base_url: &str, api_key: Option<&str>) -> ServerState {
        let mut config = DevToConfig::new(base_url);
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }

        ServerState {
            global: crate::Global {
                api_key: api_key.map(String::from),
                base_url: base_url.to_string(),
                timeout: 10,
                verbose: false,
            },
            client: DevToClient::new(&config).unwrap(),
        }
    }

    async fn call(state: &ServerState, request: Value) -> Value {
        let response = handle_request(&request.to_string(), state).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    fn tool_call(name: &str, arguments: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        })
    }

    #[tokio::test]
    async fn test_initialize() {
        let state = state("http://localhost", None);
        let response = call(
            &state,
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
        )
        .await;

        assert_eq!(response["id"], json!(1));
        assert_eq!(response["result"]["serverInfo"]["name"], json!("devto"));
        assert!(response["result"]["capabilities"]["tools"].is_object());
        assert!(response["result"]["capabilities"]["prompts"].is_object());
        assert!(response["result"]["instructions"]
            .as_str()
            .unwrap()
            .contains("search_articles"));
    }

    #[tokio::test]
    async fn test_tools_list_exposes_every_operation() {
        let state = state("http://localhost", None);
        let response = call(
            &state,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        )
        .await;

        let names: Vec<&str> = response["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            [
                "get_latest_articles",
                "get_top_articles",
                "get_articles_by_tag",
                "get_article_by_id",
                "search_articles",
                "get_article_details",
                "get_articles_by_username",
                "create_article",
                "update_article",
                "get_user_info",
            ]
        );
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let state = state("http://localhost", None);
        let request = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });

        assert!(handle_request(&request.to_string(), &state).await.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let state = state("http://localhost", None);
        let response = handle_request("{not json", &state).await.unwrap();
        let response = serde_json::to_value(response).unwrap();

        assert_eq!(response["error"]["code"], json!(-32700));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let state = state("http://localhost", None);
        let response = call(
            &state,
            json!({ "jsonrpc": "2.0", "id": 3, "method": "resources/list" }),
        )
        .await;

        assert_eq!(response["error"]["code"], json!(-32601));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let state = state("http://localhost", None);
        let response = call(&state, tool_call("delete_article", json!({}))).await;

        assert_eq!(response["error"]["code"], json!(-32602));
    }

    #[tokio::test]
    async fn test_prompts_get() {
        let state = state("http://localhost", None);
        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "prompts/get",
                "params": { "name": "search_prompt", "arguments": { "query": "rust" } }
            }),
        )
        .await;

        assert_eq!(
            response["result"]["messages"][0]["content"]["text"],
            json!("Please search for articles on Dev.to about rust and summarize the key findings.")
        );
        assert_eq!(response["result"]["messages"][0]["role"], json!("user"));
    }

    #[tokio::test]
    async fn test_prompts_list() {
        let state = state("http://localhost", None);
        let response = call(
            &state,
            json!({ "jsonrpc": "2.0", "id": 5, "method": "prompts/list" }),
        )
        .await;

        let prompts = response["result"]["prompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[1]["name"], json!("analyze_article"));
        assert_eq!(prompts[1]["arguments"][0]["name"], json!("article_id"));
    }

    #[tokio::test]
    async fn test_get_user_info_not_found_is_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let state = state(&server.uri(), None);
        let response = call(
            &state,
            tool_call("get_user_info", json!({ "username": "ghost" })),
        )
        .await;

        assert!(response.get("error").is_none());
        assert_eq!(
            response["result"]["content"][0],
            json!({ "type": "text", "text": "User ghost not found." })
        );
    }

    #[tokio::test]
    async fn test_get_article_by_id_accepts_number() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles/123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "title": "Test Article" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let state = state(&server.uri(), None);
        let response = call(&state, tool_call("get_article_by_id", json!({ "id": 123 }))).await;

        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# Test Article"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_tool_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles/latest"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let state = state(&server.uri(), None);
        let response = call(&state, tool_call("get_latest_articles", json!({}))).await;

        assert_eq!(response["error"]["code"], json!(-32603));
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("500"));
    }

    #[tokio::test]
    async fn test_create_article_missing_title_is_invalid_params() {
        let state = state("http://localhost", Some("secret"));
        let response = call(
            &state,
            tool_call("create_article", json!({ "body_markdown": "# Hi" })),
        )
        .await;

        assert_eq!(response["error"]["code"], json!(-32602));
    }

    #[tokio::test]
    async fn test_create_and_update_attach_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/articles"))
            .and(header("api-key", "secret"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "id": 42, "url": "https://x/42" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/articles/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/articles/42"))
            .and(header("api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "https://x/42" })))
            .expect(1)
            .mount(&server)
            .await;

        let state = state(&server.uri(), Some("secret"));

        let created = call(
            &state,
            tool_call(
                "create_article",
                json!({ "title": "Hello", "body_markdown": "# Hello", "tags": "rust" }),
            ),
        )
        .await;
        assert_eq!(
            created["result"]["content"][0]["text"],
            json!("Article created successfully with ID: 42\nURL: https://x/42")
        );

        let updated = call(
            &state,
            tool_call("update_article", json!({ "article_id": 42, "published": true })),
        )
        .await;
        assert_eq!(
            updated["result"]["content"][0]["text"],
            json!("Article updated successfully\nURL: https://x/42")
        );
    }
}
