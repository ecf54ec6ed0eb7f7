use chrono::NaiveDate;
use newslens_core::Article;

/// The user's current (date, country) picker state.
///
/// Either half may be unset while the user is still choosing; downstream
/// aggregation only runs once both are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub date: Option<NaiveDate>,
    pub country: Option<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new(date: Option<NaiveDate>, country: Option<String>) -> Self {
        Self { date, country }
    }

    /// Both halves of the selection, or `None` as the "no update" signal:
    /// with a partial selection the caller keeps its prior view and must not
    /// recompute.
    #[must_use]
    pub fn selection(&self) -> Option<(NaiveDate, &str)> {
        match (self.date, self.country.as_deref()) {
            (Some(date), Some(country)) => Some((date, country)),
            _ => None,
        }
    }
}

/// Articles matching the selected day and country exactly.
///
/// Dates are compared as [`NaiveDate`], normalized once at load time, so no
/// string-format mismatch can produce false negatives. An empty result is
/// valid; downstream pivots report all-zero counts for it.
#[must_use]
pub fn filter_articles(articles: &[Article], date: NaiveDate, country: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| a.scrape_date == date && a.country == country)
        .cloned()
        .collect()
}
