//! Canned prompt templates offered to MCP clients
//!
//! Templates are plain string substitutions. Nothing here talks to the API.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PromptDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgument],
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },
}

pub const PROMPTS: &[PromptDefinition] = &[
    PromptDefinition {
        name: "search_prompt",
        description: "Create a search prompt for Dev.to articles",
        arguments: &[PromptArgument {
            name: "query",
            description: "Topic to search for",
            required: true,
        }],
    },
    PromptDefinition {
        name: "analyze_article",
        description: "Create a prompt to analyze a specific article",
        arguments: &[PromptArgument {
            name: "article_id",
            description: "ID of the article to analyze",
            required: true,
        }],
    },
];

pub fn search_prompt(query: &str) -> String {
    format!("Please search for articles on Dev.to about {query} and summarize the key findings.")
}

pub fn analyze_article(article_id: &str) -> String {
    format!(
        "Please analyze the Dev.to article with ID {article_id} and provide a summary of its key points and insights."
    )
}

/// Look up a prompt by name and fill it with `arguments`
pub fn render_prompt(
    name: &str,
    arguments: &HashMap<String, String>,
) -> Result<(&'static PromptDefinition, String), PromptError> {
    let definition = PROMPTS
        .iter()
        .find(|prompt| prompt.name == name)
        .ok_or_else(|| PromptError::UnknownPrompt(name.to_string()))?;

    let argument = move |key: &'static str| {
        arguments
            .get(key)
            .map(String::as_str)
            .ok_or(PromptError::MissingArgument {
                prompt: definition.name,
                argument: key,
            })
    };

    let text = match definition.name {
        "search_prompt" => search_prompt(argument("query")?),
        "analyze_article" => analyze_article(argument("article_id")?),
        other => return Err(PromptError::UnknownPrompt(other.to_string())),
    };

    Ok((definition, text))
}
