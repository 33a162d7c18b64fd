use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use newsglobe::feeds::{for_you_feed, global_trending, location_feed, search_feed};
use newsglobe::fetch::{NewsApiClient, NewsApiConfig};
use newsglobe::models::UserActivity;
use newsglobe::tables::Tables;

/// newsglobe - headlines feeds for the globe front end
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// NewsAPI key (default: NEWS_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Hourly request budget before calls fail fast locally
    #[arg(long, default_value_t = 1000)]
    rate_limit: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trending headlines pooled across us/gb/de/fr/jp/in/br
    Trending {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// One country's headlines grouped into a location bundle
    Location {
        country: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Full-text search across all sources
    Search {
        query: String,
        #[arg(long, default_value = "en")]
        language: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Personalized recommendations scored against an activity profile
    ForYou {
        /// Path to a UserActivity profile (JSON)
        #[arg(long)]
        profile: PathBuf,
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn load_profile(path: &PathBuf) -> Result<UserActivity> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading activity profile {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing activity profile {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting newsglobe");

    let args = Args::parse();

    let api_key = match args.api_key {
        Some(key) => {
            debug!("Using API key from --api-key argument");
            key
        }
        None => std::env::var("NEWS_API_KEY").map_err(|_| {
            anyhow::anyhow!(
                "no API key provided\n\
                 Use --api-key or set the NEWS_API_KEY environment variable.\n\
                 Keys are issued at https://newsapi.org/"
            )
        })?,
    };

    let tables = Tables::builtin();
    let mut config = NewsApiConfig::new(api_key);
    config.rate_limit_per_hour = args.rate_limit;
    let client = NewsApiClient::new(config);

    let output = match args.command {
        Command::Trending { category, limit } => {
            let articles = global_trending(&client, &tables, category.as_deref(), limit).await;
            serde_json::to_string_pretty(&articles)?
        }
        Command::Location { country, category } => {
            let bundle = location_feed(&client, &tables, &country, category.as_deref()).await?;
            match bundle {
                Some(bundle) => serde_json::to_string_pretty(&bundle)?,
                None => {
                    info!("No news found for {}", country);
                    serde_json::to_string_pretty(&serde_json::Value::Null)?
                }
            }
        }
        Command::Search {
            query,
            language,
            page,
            limit,
        } => {
            let results = search_feed(&client, &tables, &query, &language, page, limit).await?;
            serde_json::to_string_pretty(&results)?
        }
        Command::ForYou { profile, category } => {
            let profile = load_profile(&profile)?;
            // candidate pool: a fresh trending snapshot across all countries
            let candidates =
                global_trending(&client, &tables, category.as_deref(), usize::MAX).await;
            let feed = for_you_feed(&profile, &candidates);
            serde_json::to_string_pretty(&feed)?
        }
    };

    println!("{}", output);
    Ok(())
}
