//! Database operations for the `news` table.

use chrono::NaiveDate;
use newslens_core::{Article, Genre};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `news` table, one boolean column per genre tag.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub newspaper: String,
    pub country: String,
    pub country_key: String,
    pub scrape_date: NaiveDate,
    pub link: String,
    pub positive: bool,
    pub culture: bool,
    pub economy: bool,
    pub entertainment: bool,
    pub health: bool,
    pub police: bool,
    pub policy: bool,
    pub science: bool,
    pub society: bool,
    pub sports: bool,
    pub tech: bool,
    pub war: bool,
    pub other: bool,
}

impl ArticleRow {
    const fn flag(&self, genre: Genre) -> bool {
        match genre {
            Genre::Culture => self.culture,
            Genre::Economy => self.economy,
            Genre::Entertainment => self.entertainment,
            Genre::Health => self.health,
            Genre::Police => self.police,
            Genre::Policy => self.policy,
            Genre::Science => self.science,
            Genre::Society => self.society,
            Genre::Sports => self.sports,
            Genre::Tech => self.tech,
            Genre::War => self.war,
            Genre::Other => self.other,
        }
    }
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let genres = Genre::CANONICAL
            .into_iter()
            .filter(|g| row.flag(*g))
            .collect();
        Article {
            title: row.title,
            newspaper: row.newspaper,
            country: row.country,
            country_key: row.country_key,
            scrape_date: row.scrape_date,
            link: row.link,
            positive: row.positive,
            genres,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

const ARTICLE_COLUMNS: &str = "id, title, newspaper, country, country_key, scrape_date, link, \
     positive, culture, economy, entertainment, health, police, policy, \
     science, society, sports, tech, war, other";

/// Load articles whose `scrape_date` falls within the last `retention_days`
/// days, ordered deterministically.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn load_recent_articles(
    pool: &PgPool,
    retention_days: u32,
) -> Result<Vec<Article>, DbError> {
    let days = i32::try_from(retention_days).unwrap_or(i32::MAX);
    let sql = format!(
        "SELECT {ARTICLE_COLUMNS} \
         FROM news \
         WHERE scrape_date >= CURRENT_DATE - $1::INT \
         ORDER BY scrape_date, country, id"
    );
    let rows = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(days)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Article::from).collect())
}

/// Insert one article and return its generated id. Used for seeding.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_article(pool: &PgPool, article: &Article) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO news \
             (title, newspaper, country, country_key, scrape_date, link, positive, \
              culture, economy, entertainment, health, police, policy, \
              science, society, sports, tech, war, other) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, \
                 $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
         RETURNING id",
    )
    .bind(&article.title)
    .bind(&article.newspaper)
    .bind(&article.country)
    .bind(&article.country_key)
    .bind(article.scrape_date)
    .bind(&article.link)
    .bind(article.positive)
    .bind(article.has_genre(Genre::Culture))
    .bind(article.has_genre(Genre::Economy))
    .bind(article.has_genre(Genre::Entertainment))
    .bind(article.has_genre(Genre::Health))
    .bind(article.has_genre(Genre::Police))
    .bind(article.has_genre(Genre::Policy))
    .bind(article.has_genre(Genre::Science))
    .bind(article.has_genre(Genre::Society))
    .bind(article.has_genre(Genre::Sports))
    .bind(article.has_genre(Genre::Tech))
    .bind(article.has_genre(Genre::War))
    .bind(article.has_genre(Genre::Other))
    .fetch_one(pool)
    .await?;

    Ok(id)
}
