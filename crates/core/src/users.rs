//! Pure transformation functions for Dev.to user profiles

use serde::{Deserialize, Serialize};

use crate::articles::{is_blank, present};

pub const USER_NOT_FOUND: &str = "User not found.";

const UNKNOWN: &str = "Unknown";
const NO_BIO: &str = "No bio available.";

/// User profile as returned by `/users/{username}`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct User {
    pub username: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub twitter_username: Option<String>,
    pub github_username: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,
    pub joined_at: Option<String>,
}

/// Decode a user response. `null` and `{}` mean there is no user.
pub fn decode_user(value: serde_json::Value) -> Result<Option<User>, serde_json::Error> {
    if is_blank(&value) {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

/// Message returned when the API has no user with this username.
pub fn user_not_found_message(username: &str) -> String {
    format!("User {username} not found.")
}

/// Render a user profile as Markdown.
///
/// Lines for optional fields are only written when the field has a value, and
/// a section with no lines is left out entirely.
pub fn format_user_profile(user: Option<&User>) -> String {
    let Some(user) = user else {
        return USER_NOT_FOUND.to_string();
    };

    let mut result = format!(
        "# {} (@{})\n\n",
        present(&user.name).unwrap_or(UNKNOWN),
        present(&user.username).unwrap_or(UNKNOWN)
    );
    result.push_str(&format!(
        "Bio: {}\n",
        present(&user.summary).unwrap_or(NO_BIO)
    ));

    let details: Vec<String> = [
        present(&user.location).map(|location| format!("Location: {location}")),
        present(&user.joined_at).map(|joined| format!("Member since: {joined}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let links: Vec<String> = [
        present(&user.twitter_username).map(|handle| format!("Twitter: @{handle}")),
        present(&user.github_username).map(|handle| format!("GitHub: {handle}")),
        present(&user.website_url).map(|url| format!("Website: {url}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    push_section(&mut result, "Details", &details);
    push_section(&mut result, "Links", &links);

    result
}

fn push_section(result: &mut String, heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }

    result.push_str(&format!("\n## {heading}\n"));
    for line in lines {
        result.push_str(line);
        result.push('\n');
    }
}
