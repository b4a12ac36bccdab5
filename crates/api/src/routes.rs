use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/dns-query", get(handlers::dns_query))
        .route("/version", get(handlers::version))
        .route("/", get(handlers::welcome))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
}
