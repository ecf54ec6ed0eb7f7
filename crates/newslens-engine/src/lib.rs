//! Pure aggregation over the in-memory article table.
//!
//! Every function here takes the dataset by reference and returns freshly
//! owned values. No I/O, no shared mutable state, no caching: the loader
//! owns the raw table, and callers recompute derived views per interaction.

mod error;
mod filter;
mod options;
mod pivot;
mod random;
mod rollup;

pub use error::EngineError;
pub use filter::{filter_articles, FilterSelection};
pub use options::{filter_options, FilterOptions};
pub use pivot::{genre_pivot, sentiment_totals, GenreSentimentPivot, SentimentTotals};
pub use random::{pick_random_article, pick_random_article_with, ArticleDetail};
pub use rollup::{country_rollup, CountryRollup};
