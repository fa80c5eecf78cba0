use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub backend: BackendStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct BackendStatus {
    /// `ok` or `error`.
    pub status: String,
    pub url: String,
}

/// `GET /api/v1/health`
///
/// Always 200; a down backend is reported in `backend.status`.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let backend_status = match state.backend.ping().await {
        Ok(()) => "ok",
        Err(error) => {
            tracing::warn!(error = %error, "Backend health probe failed");
            "error"
        }
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: BackendStatus {
            status: backend_status.to_string(),
            url: state.config.backend.base_url.clone(),
        },
    })
}
