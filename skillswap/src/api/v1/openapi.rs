use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::feed::{AdvancePolicy, FeedFilters, FeedPhase};
use crate::models::SwipeDirection;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkillSwap Feed API",
        version = "1.0.0",
        description = "Candidate feed and swipe decisions for SkillSwap clients.",
    ),
    paths(
        handlers::health::health_check,
        handlers::feed::open_feed,
        handlers::feed::get_feed,
        handlers::feed::update_filters,
        handlers::feed::decide,
        handlers::feed::close_feed,
        handlers::stats::get_stats,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Feed
        FeedFilters,
        FeedPhase,
        AdvancePolicy,
        SwipeDirection,
        dto::feed::FeedFiltersRequest,
        dto::feed::DecideRequest,
        dto::feed::CandidateResponse,
        dto::feed::FeedResponse,
        dto::feed::DecisionResponse,
        dto::feed::DecideResponse,
        dto::feed::CloseFeedResponse,
        // Stats
        dto::stats::StatsResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::BackendStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "feed", description = "Candidate feed and swipe decisions"),
        (name = "stats", description = "Match statistics"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feed_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/health",
            "/api/v1/feed/{userId}",
            "/api/v1/feed/{userId}/filters",
            "/api/v1/feed/{userId}/decisions",
            "/api/v1/users/{userId}/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
