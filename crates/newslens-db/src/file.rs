//! Flat-file dataset loading: a pre-exported JSON array of articles.

use std::path::Path;

use newslens_core::Article;

use crate::DbError;

/// Read a JSON array of articles from `path`.
///
/// The file format is the serde representation of [`Article`]: dates as
/// `YYYY-MM-DD` strings, genres as an array of lowercase names. The whole
/// file is read into memory; datasets here are a retention window of
/// scraped articles, not an archive.
///
/// # Errors
///
/// Returns [`DbError::Io`] if the file cannot be read, or [`DbError::Json`]
/// if it does not parse as an article array.
pub fn load_articles_from_json(path: &Path) -> Result<Vec<Article>, DbError> {
    let raw = std::fs::read_to_string(path)?;
    let articles: Vec<Article> = serde_json::from_str(&raw)?;
    Ok(articles)
}
