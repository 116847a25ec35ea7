use crate::prelude::*;
use clap::Parser;

mod articles;
mod client;
mod config;
mod error;
mod mcp;
mod prelude;
mod users;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read, search, create and update Dev.to articles from the CLI or as MCP tools"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Dev.to API key, required to create or update articles
    #[clap(long, env = "DEV_TO_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Dev.to API base URL
    #[clap(
        long,
        env = "DEV_TO_BASE_URL",
        global = true,
        default_value = config::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Request timeout in seconds
    #[clap(long, env = "DEV_TO_TIMEOUT", global = true, default_value = "10")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "DEVTO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Dev.to article operations
    Articles(crate::articles::App),

    /// Dev.to user operations
    Users(crate::users::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let config = config::DevToConfig::from_global(&app.global);
    let client = client::DevToClient::new(&config)?;

    match app.command {
        SubCommands::Articles(sub_app) => crate::articles::run(sub_app, &client, app.global).await,
        SubCommands::Users(sub_app) => crate::users::run(sub_app, &client, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, client, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
