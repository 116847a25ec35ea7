use devto_core::users::{decode_user, format_user_profile, user_not_found_message};

use crate::client::DevToClient;
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "users")]
#[command(about = "Dev.to user operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show a user's profile
    #[clap(name = "get")]
    Get(GetOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Username (e.g. "ben")
    pub username: String,
}

/// Fetch a user profile.
///
/// An unknown username is not an error: the API's 404 becomes a
/// "not found" message. Every other failure propagates.
pub async fn user_info_data(client: &DevToClient, username: &str) -> Result<String, Error> {
    let path = format!("/users/{}", urlencoding::encode(username));

    let value = match client.fetch::<serde_json::Value>(&path, &[]).await {
        Ok(value) => value,
        Err(err) if err.status() == Some(404) => {
            log::debug!("User {username} not found");
            return Ok(user_not_found_message(username));
        }
        Err(err) => return Err(err),
    };

    let user = decode_user(value).map_err(|e| Error::UnexpectedResponse(e.to_string()))?;

    Ok(format_user_profile(user.as_ref()))
}

pub async fn run(app: App, client: &DevToClient, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Dev.to API Base: {}", global.base_url);
        println!();
    }

    match app.command {
        Commands::Get(options) => {
            println!("{}", user_info_data(client, &options.username).await?);
        }
    }

    Ok(())
}
