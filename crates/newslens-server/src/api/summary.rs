use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use newslens_engine::{
    filter_articles, genre_pivot, sentiment_totals, FilterSelection, GenreSentimentPivot,
    SentimentTotals,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SummaryQuery {
    pub date: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SummaryData {
    pub date: NaiveDate,
    pub country: String,
    pub article_count: usize,
    pub totals: SentimentTotals,
    pub genres: GenreSentimentPivot,
}

/// Genre pivot and sentiment totals for one (date, country) selection.
///
/// Both parameters are required; a partial selection means the client keeps
/// its prior view, so it is rejected as a validation error rather than
/// answered with a half-filtered dataset.
pub(super) async fn news_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<ApiResponse<SummaryData>>, ApiError> {
    let date = query
        .date
        .as_deref()
        .map(|raw| {
            raw.parse::<NaiveDate>().map_err(|e| {
                ApiError::new(
                    req_id.0.clone(),
                    "validation_error",
                    format!("date must be YYYY-MM-DD: {e}"),
                )
            })
        })
        .transpose()?;

    let selection = FilterSelection::new(date, query.country);
    let Some((date, country)) = selection.selection() else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "date and country are required",
        ));
    };

    let matched = filter_articles(&state.articles, date, country);
    let data = SummaryData {
        date,
        country: country.to_string(),
        article_count: matched.len(),
        totals: sentiment_totals(&matched),
        genres: genre_pivot(&matched),
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
