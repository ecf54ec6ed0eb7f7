//! Offline unit tests for newslens-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::NaiveDate;
use newslens_core::{AppConfig, Article, DataSource, Environment, Genre};
use newslens_db::{ArticleRow, PoolConfig};

fn test_app_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        data_source: Some(DataSource::Postgres {
            url: "postgres://example".to_string(),
        }),
        retention_days: 10,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    }
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let pool_config = PoolConfig::from_app_config(&test_app_config());
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`ArticleRow`] has all expected
/// fields with the correct types, and that the conversion into the domain
/// type collects every flagged genre. No database required.
#[test]
fn article_row_converts_all_genre_flags() {
    let row = ArticleRow {
        id: 7,
        title: "Everything happened today".to_string(),
        newspaper: "The Wire".to_string(),
        country: "Uruguay".to_string(),
        country_key: "URY".to_string(),
        scrape_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
        link: "https://example.com/everything".to_string(),
        positive: true,
        culture: true,
        economy: true,
        entertainment: true,
        health: true,
        police: true,
        policy: true,
        science: true,
        society: true,
        sports: true,
        tech: true,
        war: true,
        other: true,
    };

    let article = Article::from(row);
    assert_eq!(article.genres.len(), 12);
    assert_eq!(article.genres, Genre::CANONICAL.to_vec());
}
