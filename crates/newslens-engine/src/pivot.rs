//! Genre-by-sentiment pivot and sentiment totals for a filtered view.

use newslens_core::{Article, Genre};
use serde::Serialize;

/// Per-genre counts split by sentiment, as three aligned sequences.
///
/// `genres[i]`, `negative[i]` and `positive[i]` describe the same genre;
/// the order is the stacked-bar display order ([`Genre::display_order`]).
/// A multi-label article contributes to every genre it carries, so summed
/// counts track flag bits, not article count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSentimentPivot {
    pub genres: Vec<Genre>,
    pub negative: Vec<u64>,
    pub positive: Vec<u64>,
}

/// Positive/negative article counts over a filtered view: the pie chart's
/// two slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentTotals {
    pub positive: u64,
    pub negative: u64,
}

/// Sum each genre flag separately over positive and negative articles.
///
/// Empty input yields all-zero counts for all twelve genres, not an error.
#[must_use]
pub fn genre_pivot(articles: &[Article]) -> GenreSentimentPivot {
    let genres = Genre::display_order();
    let mut negative = vec![0_u64; genres.len()];
    let mut positive = vec![0_u64; genres.len()];

    for article in articles {
        for (i, genre) in genres.iter().enumerate() {
            if article.has_genre(*genre) {
                if article.positive {
                    positive[i] += 1;
                } else {
                    negative[i] += 1;
                }
            }
        }
    }

    GenreSentimentPivot {
        genres: genres.to_vec(),
        negative,
        positive,
    }
}

/// Count positive and negative articles in a filtered view.
#[must_use]
pub fn sentiment_totals(articles: &[Article]) -> SentimentTotals {
    let positive = articles.iter().filter(|a| a.positive).count() as u64;
    SentimentTotals {
        positive,
        negative: articles.len() as u64 - positive,
    }
}
