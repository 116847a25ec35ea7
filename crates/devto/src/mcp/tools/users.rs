use crate::prelude::eprintln;
use serde::Deserialize;

use super::{parse_arguments, text_result, JsonRpcError, ServerState, Tool};

pub fn definitions() -> Vec<Tool> {
    vec![Tool {
        name: "get_user_info".to_string(),
        description: "Get information about a Dev.to user: name, bio, location, join date and social links. Returns a not-found message for unknown usernames.".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "description": "The username of the user"
                }
            },
            "required": ["username"]
        }),
    }]
}

pub async fn handle_get_user_info(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UserInfoArgs {
        username: String,
    }

    let args: UserInfoArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_user_info: username={}", args.username);
    }

    text_result(crate::users::user_info_data(&state.client, &args.username).await)
}
