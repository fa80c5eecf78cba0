//! v1 feed handlers.
//!
//! A feed is opened per viewer, then driven one decision at a time. Every
//! response carries the feed as it stands afterwards.

use axum::extract::{Path, State};

use super::check_user_id;
use crate::api::v1::dto::{
    CloseFeedResponse, DecideRequest, DecideResponse, FeedFiltersRequest, FeedResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::{AppJson, AppState};
use crate::models::UserId;

/// `POST /api/v1/feed/{userId}`
///
/// Builds a fresh feed for the viewer, replacing any open one. The body is
/// optional; without it the default filters apply.
#[utoipa::path(
    post,
    path = "/api/v1/feed/{userId}",
    tag = "feed",
    operation_id = "feed.open",
    params(("userId" = i64, Path, description = "Viewer's backend user id")),
    request_body(content = FeedFiltersRequest, description = "Optional initial filters"),
    responses(
        (status = 201, description = "Feed opened", body = FeedResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 502, description = "Backend failure", body = ApiError),
    )
)]
pub async fn open_feed(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Option<AppJson<FeedFiltersRequest>>,
) -> ApiResponse<FeedResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    let req = body.map(|AppJson(req)| req).unwrap_or_default();
    let filters = match req.into_filters(state.feed.default_filters()) {
        Ok(filters) => filters,
        Err(e) => return e.into(),
    };

    match state.feed.open(user_id, filters).await {
        Ok(session) => ApiResponse::created(FeedResponse::from(&session)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/feed/{userId}`
#[utoipa::path(
    get,
    path = "/api/v1/feed/{userId}",
    tag = "feed",
    operation_id = "feed.get",
    params(("userId" = i64, Path, description = "Viewer's backend user id")),
    responses(
        (status = 200, description = "Current feed", body = FeedResponse),
        (status = 400, description = "Invalid user id", body = ApiError),
        (status = 404, description = "No open feed", body = ApiError),
    )
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResponse<FeedResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    match state.feed.view(user_id).await {
        Ok(session) => ApiResponse::success(FeedResponse::from(&session)),
        Err(e) => e.into(),
    }
}

/// `PUT /api/v1/feed/{userId}/filters`
///
/// Replaces the filters and rebuilds the feed from index 0. Opens a feed if
/// none exists.
#[utoipa::path(
    put,
    path = "/api/v1/feed/{userId}/filters",
    tag = "feed",
    operation_id = "feed.setFilters",
    params(("userId" = i64, Path, description = "Viewer's backend user id")),
    request_body = FeedFiltersRequest,
    responses(
        (status = 200, description = "Feed rebuilt", body = FeedResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 502, description = "Backend failure", body = ApiError),
    )
)]
pub async fn update_filters(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    AppJson(req): AppJson<FeedFiltersRequest>,
) -> ApiResponse<FeedResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    let filters = match req.into_filters(state.feed.default_filters()) {
        Ok(filters) => filters,
        Err(e) => return e.into(),
    };

    match state.feed.set_filters(user_id, filters).await {
        Ok(session) => ApiResponse::success(FeedResponse::from(&session)),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/feed/{userId}/decisions`
///
/// Likes or passes on the current candidate, either directly or from a
/// released drag. The feed only advances once the backend has recorded the
/// swipe.
#[utoipa::path(
    post,
    path = "/api/v1/feed/{userId}/decisions",
    tag = "feed",
    operation_id = "feed.decide",
    params(("userId" = i64, Path, description = "Viewer's backend user id")),
    request_body = DecideRequest,
    responses(
        (status = 200, description = "Decision applied, or nothing to decide", body = DecideResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No open feed", body = ApiError),
        (status = 502, description = "Swipe not recorded", body = ApiError),
    )
)]
pub async fn decide(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    AppJson(req): AppJson<DecideRequest>,
) -> ApiResponse<DecideResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    let outcome = match (req.direction, req.drag_dx) {
        (Some(direction), None) => state.feed.decide(user_id, direction).await,
        (None, Some(drag_dx)) if drag_dx.is_finite() => {
            state.feed.release_drag(user_id, drag_dx).await
        }
        (None, Some(_)) => {
            return ApiResponse::error(ErrorCode::InvalidRequest, "dragDx must be a finite number")
        }
        _ => {
            return ApiResponse::error(
                ErrorCode::InvalidRequest,
                "Provide exactly one of direction or dragDx",
            )
        }
    };

    match outcome {
        Ok(outcome) => ApiResponse::success(DecideResponse::from(&outcome)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/feed/{userId}`
#[utoipa::path(
    delete,
    path = "/api/v1/feed/{userId}",
    tag = "feed",
    operation_id = "feed.close",
    params(("userId" = i64, Path, description = "Viewer's backend user id")),
    responses(
        (status = 200, description = "Feed closed", body = CloseFeedResponse),
        (status = 400, description = "Invalid user id", body = ApiError),
    )
)]
pub async fn close_feed(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResponse<CloseFeedResponse> {
    if let Err(e) = check_user_id(user_id) {
        return e.into();
    }

    ApiResponse::success(CloseFeedResponse {
        user_id,
        closed: state.feed.close(user_id),
    })
}
