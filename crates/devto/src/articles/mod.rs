use crate::client::DevToClient;
use crate::prelude::{println, *};
use colored::Colorize;

pub mod create;
pub mod list;
pub mod read;
pub mod update;

// Re-export public data functions
pub use create::create_article_data;
pub use list::{
    articles_by_tag_data, articles_by_username_data, latest_articles_data, search_articles_data,
    top_articles_data,
};
pub use read::{article_by_id_data, article_details_data};
pub use update::update_article_data;

#[derive(Debug, clap::Parser)]
#[command(name = "articles")]
#[command(about = "Dev.to article operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the latest articles
    #[clap(name = "latest")]
    Latest,

    /// List the top articles
    #[clap(name = "top")]
    Top,

    /// List articles with a tag
    #[clap(name = "tag")]
    Tag(list::TagOptions),

    /// List articles written by a user
    #[clap(name = "user")]
    User(list::UsernameOptions),

    /// Search one page of top articles by title or description
    #[clap(name = "search")]
    Search(list::SearchOptions),

    /// Show an article with its full content
    #[clap(name = "get")]
    Get(read::GetOptions),

    /// Create a new article
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update an existing article
    #[clap(name = "update")]
    Update(update::UpdateOptions),
}

pub async fn run(app: App, client: &DevToClient, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Dev.to API Base: {}", global.base_url);
        println!();
    }

    let text = match app.command {
        Commands::Latest => latest_articles_data(client).await?,
        Commands::Top => top_articles_data(client).await?,
        Commands::Tag(options) => articles_by_tag_data(client, &options.tag).await?,
        Commands::User(options) => articles_by_username_data(client, &options.username).await?,
        Commands::Search(options) => {
            search_articles_data(client, &options.query, options.page).await?
        }
        Commands::Get(options) => article_by_id_data(client, &options.id).await?,
        Commands::Create(options) => {
            let text = create::run(options, client).await?;
            println!("{}", text.green());
            return Ok(());
        }
        Commands::Update(options) => {
            let text = update::run(options, client).await?;
            println!("{}", text.green());
            return Ok(());
        }
    };

    println!("{text}");

    Ok(())
}
