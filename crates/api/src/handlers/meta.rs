use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use tracing::instrument;

#[instrument(skip_all, name = "api_version")]
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[instrument(skip_all, name = "api_welcome")]
pub async fn welcome(headers: HeaderMap) -> String {
    let hostname = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("abuse-dns");

    format!("Welcome to {}", hostname)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found.")
}
