use axum::{extract::State, Extension, Json};
use newslens_engine::CountryRollup;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// Per-country positivity rollup backing the world map.
///
/// Served from the rollup computed at startup; user filters never change
/// this view.
pub(super) async fn map_positivity(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CountryRollup>>> {
    Json(ApiResponse {
        data: state.rollup.as_ref().clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
