use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::v1_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let feed = Router::new()
        .route(
            "/{userId}",
            get(handlers::feed::get_feed)
                .post(handlers::feed::open_feed)
                .delete(handlers::feed::close_feed),
        )
        .route("/{userId}/filters", put(handlers::feed::update_filters))
        .route("/{userId}/decisions", post(handlers::feed::decide));

    let users = Router::new().route("/{userId}/stats", get(handlers::stats::get_stats));

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let protected_routes = Router::new()
        .nest("/feed", feed)
        .nest("/users", users)
        .route_layer(middleware::from_fn_with_state(state, v1_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
