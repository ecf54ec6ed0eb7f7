//! Dataset loading: Postgres pool plumbing and the flat-file fallback.

use std::time::Duration;

use newslens_core::{AppConfig, Article, DataSource};
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

pub mod articles;
pub mod file;

pub use articles::{insert_article, load_recent_articles, ArticleRow};
pub use file::load_articles_from_json;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

// Path relative to crates/newslens-db/Cargo.toml; resolves to <workspace-root>/migrations/
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("no data source configured; set DATABASE_URL or NEWSLENS_DATASET_PATH")]
    NoDataSource,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Connect to a Postgres pool using explicit URL and config.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the connection cannot be established.
pub async fn connect_pool(database_url: &str, config: PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(database_url)
        .await
}

/// Run all pending migrations against the pool.
///
/// # Errors
///
/// Returns [`sqlx::migrate::MigrateError`] if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Load the article dataset from whichever source the config names.
///
/// Postgres sources get pending migrations applied before the read. This
/// runs once at startup; a failure here is fatal, since nothing downstream
/// can render without a dataset.
///
/// # Errors
///
/// Returns [`DbError::NoDataSource`] when the config names no source, or
/// the underlying connection/read/parse error otherwise.
pub async fn load_dataset(config: &AppConfig) -> Result<Vec<Article>, DbError> {
    match &config.data_source {
        None => Err(DbError::NoDataSource),
        Some(DataSource::JsonFile { path }) => {
            tracing::info!(path = %path.display(), "loading dataset from flat file");
            file::load_articles_from_json(path)
        }
        Some(DataSource::Postgres { url }) => {
            let pool = connect_pool(url, PoolConfig::from_app_config(config)).await?;
            run_migrations(&pool).await?;
            let articles = articles::load_recent_articles(&pool, config.retention_days).await?;
            tracing::info!(
                count = articles.len(),
                retention_days = config.retention_days,
                "loaded dataset from database"
            );
            Ok(articles)
        }
    }
}
