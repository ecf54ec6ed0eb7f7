use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use newslens_core::{AppConfig, Article, DataSource};
use newslens_db::PoolConfig;
use newslens_engine::{
    country_rollup, filter_articles, genre_pivot, sentiment_totals, GenreSentimentPivot,
    SentimentTotals,
};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "newslens-cli")]
#[command(about = "Newspaper analytics command line interface")]
struct Cli {
    /// Load the dataset from a JSON export instead of the configured source.
    #[arg(long, global = true, value_name = "PATH")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the per-country positivity rollup over the whole dataset.
    Rollup,
    /// Print genre and sentiment counts for one date and country.
    Summary {
        /// Exact day to match, as YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
        /// Country display name to match exactly.
        #[arg(long)]
        country: String,
    },
    /// Print one randomly selected article.
    Random,
    /// Print the date range and country list available for filtering.
    Filters,
    /// Insert articles from a JSON export into the configured database.
    Seed {
        /// JSON export to read articles from.
        #[arg(long, value_name = "PATH")]
        from: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    date: NaiveDate,
    country: String,
    article_count: usize,
    totals: SentimentTotals,
    genres: GenreSentimentPivot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = newslens_core::load_app_config()?;
    if let Some(path) = cli.dataset {
        config.data_source = Some(DataSource::JsonFile { path });
    }

    match cli.command {
        Commands::Seed { from } => seed(&config, &from).await,
        command => {
            let articles = newslens_db::load_dataset(&config).await?;
            report(&command, &articles)
        }
    }
}

fn report(command: &Commands, articles: &[Article]) -> anyhow::Result<()> {
    match command {
        Commands::Rollup => print_json(&country_rollup(articles)),
        Commands::Summary { date, country } => {
            let matched = filter_articles(articles, *date, country);
            let summary = SummaryReport {
                date: *date,
                country: country.clone(),
                article_count: matched.len(),
                totals: sentiment_totals(&matched),
                genres: genre_pivot(&matched),
            };
            print_json(&summary)
        }
        Commands::Random => match newslens_engine::pick_random_article(articles) {
            Ok(detail) => print_json(&detail),
            Err(e) => anyhow::bail!(e),
        },
        Commands::Filters => match newslens_engine::filter_options(articles) {
            Some(options) => print_json(&options),
            None => anyhow::bail!("dataset is empty"),
        },
        Commands::Seed { .. } => unreachable!("seed is handled before loading"),
    }
}

async fn seed(config: &AppConfig, from: &Path) -> anyhow::Result<()> {
    let Some(DataSource::Postgres { url }) = &config.data_source else {
        anyhow::bail!("seeding requires DATABASE_URL to point at a database");
    };

    let articles = newslens_db::load_articles_from_json(from)?;
    let pool = newslens_db::connect_pool(url, PoolConfig::from_app_config(config)).await?;
    newslens_db::run_migrations(&pool).await?;
    for article in &articles {
        newslens_db::insert_article(&pool, article).await?;
    }
    println!("seeded {} articles", articles.len());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
