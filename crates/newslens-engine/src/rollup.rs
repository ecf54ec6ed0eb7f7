//! Per-country aggregation over the whole dataset.

use std::collections::BTreeMap;

use newslens_core::Article;
use serde::Serialize;

/// Aggregate counts and positivity rate for one country.
///
/// Computed over the entire dataset, never the filtered view: it backs the
/// world map, which is not affected by the date/country selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRollup {
    pub country: String,
    pub country_key: String,
    pub total_news: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    /// Fraction of articles classified positive, in `[0, 1]`.
    /// `None` when the group holds no articles.
    pub positivity_rate: Option<f64>,
    /// `positivity_rate` rounded to a whole percentage, in `[0, 100]`.
    pub positivity_rate_per100: Option<u8>,
}

struct GroupAcc {
    country_key: String,
    total: u64,
    positive: u64,
}

/// Group articles by country and compute per-country positivity aggregates.
///
/// Result rows are ordered by country name ascending. Countries absent from
/// the dataset produce no rows; groups are non-empty by construction, so no
/// zero-count rows are ever synthesized. The country key travels with its
/// group rather than being joined back by position, so group ordering can
/// never misalign names and keys.
#[must_use]
pub fn country_rollup(articles: &[Article]) -> Vec<CountryRollup> {
    let mut groups: BTreeMap<&str, GroupAcc> = BTreeMap::new();
    for article in articles {
        let acc = groups
            .entry(article.country.as_str())
            .or_insert_with(|| GroupAcc {
                country_key: article.country_key.clone(),
                total: 0,
                positive: 0,
            });
        acc.total += 1;
        if article.positive {
            acc.positive += 1;
        }
    }

    groups
        .into_iter()
        .map(|(country, acc)| {
            let (positivity_rate, positivity_rate_per100) = rate_fields(acc.positive, acc.total);
            CountryRollup {
                country: country.to_string(),
                country_key: acc.country_key,
                total_news: acc.total,
                positive_count: acc.positive,
                negative_count: acc.total - acc.positive,
                positivity_rate,
                positivity_rate_per100,
            }
        })
        .collect()
}

/// Rate and rounded-percentage for a group, or `(None, None)` when the
/// group is empty. Never NaN, never a division panic.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn rate_fields(positive: u64, total: u64) -> (Option<f64>, Option<u8>) {
    if total == 0 {
        return (None, None);
    }
    let rate = positive as f64 / total as f64;
    (Some(rate), Some((rate * 100.0).round() as u8))
}
