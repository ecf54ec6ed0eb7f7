use axum::{extract::State, Extension, Json};
use newslens_engine::FilterOptions;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Date-range, disabled days and country choices for the filter controls.
pub(super) async fn filter_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<FilterOptions>>, ApiError> {
    let Some(options) = newslens_engine::filter_options(&state.articles) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            "no articles available",
        ));
    };

    Ok(Json(ApiResponse {
        data: options,
        meta: ResponseMeta::new(req_id.0),
    }))
}
