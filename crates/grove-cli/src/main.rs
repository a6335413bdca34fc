//! `grove` — text front end for the plant catalog feed.
//!
//! Plays the view-layer role: loads config, builds the feed, and renders
//! pages as plain text. Pages served from the demo catalog are marked
//! `[fallback]` so a broken upstream is visible without ever showing a
//! broken page.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use grove_catalog::{CatalogFeed, CatalogPage, CatalogSource, CategorySelector, ResolverMode};

#[derive(Debug, Parser)]
#[command(name = "grove")]
#[command(about = "Plant nursery catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show a catalog page, optionally filtered by category.
    Catalog {
        /// Category selector: a local slug (e.g. "fruit-trees"), a server
        /// category id, or "all".
        #[arg(long)]
        category: Option<String>,
        /// How the category selector is applied.
        #[arg(long, value_enum, default_value_t = Mode::Local)]
        mode: Mode,
    },
    /// List selectable categories.
    Categories,
    /// Show one item in detail.
    Detail { id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Filter locally by keyword table.
    Local,
    /// Trust the server's per-category endpoint.
    Server,
}

impl From<Mode> for ResolverMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Local => ResolverMode::LocalKeyword,
            Mode::Server => ResolverMode::ServerDelegated,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = grove_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog { category, mode } => {
            let feed = CatalogFeed::from_config(&config, mode.into())?;
            let selector = CategorySelector::parse(category.as_deref());
            let page = feed.load(&selector).await;
            print_page(&page);
        }
        Commands::Categories => {
            let feed = CatalogFeed::from_config(&config, ResolverMode::LocalKeyword)?;
            for category in feed.load_categories().await {
                println!("{:<20} {}", category.id.to_string(), category.label);
            }
        }
        Commands::Detail { id } => {
            let feed = CatalogFeed::from_config(&config, ResolverMode::LocalKeyword)?;
            match feed.load_detail(&id).await {
                Some(item) => {
                    println!("{}", item.name);
                    println!("  category: {}", item.category);
                    println!("  price:    {}", item.price);
                    println!("  image:    {}", item.image);
                    println!("  {}", item.description);
                    if let Some(long) = item.long_description {
                        println!("  {long}");
                    }
                }
                None => println!("item {id} is not available"),
            }
        }
    }

    Ok(())
}

fn print_page(page: &CatalogPage) {
    let marker = match page.source {
        CatalogSource::Live => "",
        CatalogSource::Fallback => " [fallback]",
    };
    println!("{} item(s){marker}", page.items.len());
    for item in &page.items {
        println!(
            "{:<12} {:<16} {:>8}  {}",
            item.id,
            item.category,
            item.price.to_string(),
            item.name
        );
    }
}
