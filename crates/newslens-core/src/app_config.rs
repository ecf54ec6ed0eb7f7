use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where the article dataset comes from.
///
/// Both mechanisms produce the same in-memory table; everything downstream
/// of the loader is indifferent to which one supplied it.
#[derive(Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Query the `news` table over the retention window.
    Postgres { url: String },
    /// Read a pre-exported JSON array of articles.
    JsonFile { path: PathBuf },
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Postgres { .. } => f
                .debug_struct("Postgres")
                .field("url", &"[redacted]")
                .finish(),
            DataSource::JsonFile { path } => {
                f.debug_struct("JsonFile").field("path", path).finish()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `None` means no source was configured; loading fails at startup.
    pub data_source: Option<DataSource>,
    /// How many trailing days of articles the database loader fetches.
    pub retention_days: u32,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}
