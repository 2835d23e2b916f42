use super::{
    handlers::{admin_comments, comments, health},
    middleware::admin::require_admin,
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/api/admin/comments", get(admin_comments::list_comments))
        .route(
            "/api/admin/comments/{id}/approve",
            post(admin_comments::approve_comment),
        )
        .route(
            "/api/admin/comments/{id}/hide",
            post(admin_comments::hide_comment),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Public comments
        .route("/api/comments/create", post(comments::create_comment))
        .route("/api/comments/{slug}", get(comments::get_comments))
        // Admin (protected by JWT middleware)
        .merge(admin_routes)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
