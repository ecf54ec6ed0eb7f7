use axum::{extract::State, Extension, Json};
use newslens_engine::{pick_random_article, ArticleDetail};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// One uniformly random article for the random-news viewer.
///
/// Every call is an independent draw.
pub(super) async fn random_article(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ArticleDetail>>, ApiError> {
    let detail = pick_random_article(&state.articles)
        .map_err(|e| ApiError::new(req_id.0.clone(), "not_found", e.to_string()))?;

    Ok(Json(ApiResponse {
        data: detail,
        meta: ResponseMeta::new(req_id.0),
    }))
}
