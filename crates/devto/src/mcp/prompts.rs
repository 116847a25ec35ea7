use crate::prelude::eprintln;
use devto_core::prompts::{render_prompt, PROMPTS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{JsonRpcError, ServerState};

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct GetPromptResult {
    description: String,
    messages: Vec<PromptMessage>,
}

#[derive(Debug, Serialize)]
struct PromptMessage {
    role: String,
    content: super::tools::Content,
}

pub fn handle_prompts_list() -> Result<serde_json::Value, JsonRpcError> {
    Ok(serde_json::json!({ "prompts": PROMPTS }))
}

pub fn handle_prompts_get(
    params: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: GetPromptParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null)).map_err(|e| {
            JsonRpcError::new(JsonRpcError::INVALID_PARAMS, format!("Invalid params: {e}"))
        })?;

    if state.global.verbose {
        eprintln!("Rendering prompt: {}", params.name);
    }

    let (definition, text) = render_prompt(&params.name, &params.arguments)
        .map_err(|e| JsonRpcError::new(JsonRpcError::INVALID_PARAMS, e.to_string()))?;

    let result = GetPromptResult {
        description: definition.description.to_string(),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: super::tools::Content::Text { text },
        }],
    };

    serde_json::to_value(result).map_err(|e| {
        JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("Internal error: {e}"))
    })
}
