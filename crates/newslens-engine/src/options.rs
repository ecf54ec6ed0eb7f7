//! Derives what the date picker and country dropdown need from the dataset.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use newslens_core::Article;
use serde::Serialize;

/// Bounds and choices for the filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    /// Days inside `[min_date, max_date]` with no articles at all; the date
    /// picker greys these out.
    pub disabled_dates: Vec<NaiveDate>,
    /// Distinct country names, ascending.
    pub countries: Vec<String>,
    /// Preselected date: the most recent one with articles.
    pub default_date: NaiveDate,
    /// Preselected country: first in the list.
    pub default_country: String,
}

/// Compute filter-control options, or `None` for an empty dataset.
#[must_use]
pub fn filter_options(articles: &[Article]) -> Option<FilterOptions> {
    let dates: BTreeSet<NaiveDate> = articles.iter().map(|a| a.scrape_date).collect();
    let countries: BTreeSet<&str> = articles.iter().map(|a| a.country.as_str()).collect();

    let min_date = *dates.first()?;
    let max_date = *dates.last()?;
    let disabled_dates = min_date
        .iter_days()
        .take_while(|d| *d <= max_date)
        .filter(|d| !dates.contains(d))
        .collect();
    let countries: Vec<String> = countries.into_iter().map(ToOwned::to_owned).collect();
    let default_country = countries.first()?.clone();

    Some(FilterOptions {
        min_date,
        max_date,
        disabled_dates,
        countries,
        default_date: max_date,
        default_country,
    })
}
