use abuse_dns_domain::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The DoH wire contract wants short plain-text reasons, not JSON bodies.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, "Invalid query")
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        };

        (status, message).into_response()
    }
}
