use axum::extract::{Path, State};

use super::check_user_id;
use crate::api::v1::dto::StatsResponse;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::UserId;

/// `GET /api/v1/users/{userId}/stats`
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/stats",
    tag = "stats",
    operation_id = "users.stats",
    params(("userId" = i64, Path, description = "Backend user id")),
    responses(
        (status = 200, description = "Match statistics", body = StatsResponse),
        (status = 502, description = "Backend failure", body = ApiError),
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResponse<StatsResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    match state.feed.match_count(user_id).await {
        Ok(total_matches) => ApiResponse::success(StatsResponse {
            user_id,
            total_matches,
        }),
        Err(e) => e.into(),
    }
}
