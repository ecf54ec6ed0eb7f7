use newslens_core::Article;
use rand::Rng;
use serde::Serialize;

use crate::EngineError;

/// Display projection of one article for the random-article viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    pub title: String,
    pub newspaper: String,
    pub country: String,
    pub link: String,
    /// Capitalized labels of the article's genre tags; empty when the
    /// article carries none.
    pub genres: Vec<&'static str>,
    /// `"Positive"` or `"Negative"`.
    pub sentiment: &'static str,
}

impl ArticleDetail {
    fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            newspaper: article.newspaper.clone(),
            country: article.country.clone(),
            link: article.link.clone(),
            genres: article.genres.iter().map(|g| g.label()).collect(),
            sentiment: if article.positive {
                "Positive"
            } else {
                "Negative"
            },
        }
    }
}

/// Select one article uniformly at random.
///
/// Each call is an independent draw; nothing is cached.
///
/// # Errors
///
/// Returns [`EngineError::EmptyDataset`] when no articles are loaded.
pub fn pick_random_article(articles: &[Article]) -> Result<ArticleDetail, EngineError> {
    let mut rng = rand::rng();
    pick_random_article_with(articles, &mut rng)
}

/// [`pick_random_article`] with a caller-supplied RNG, so tests can seed
/// the draw.
///
/// # Errors
///
/// Returns [`EngineError::EmptyDataset`] when no articles are loaded.
pub fn pick_random_article_with<R: Rng + ?Sized>(
    articles: &[Article],
    rng: &mut R,
) -> Result<ArticleDetail, EngineError> {
    if articles.is_empty() {
        return Err(EngineError::EmptyDataset);
    }
    let index = rng.random_range(0..articles.len());
    Ok(ArticleDetail::from_article(&articles[index]))
}
