use crate::{dto::DnsQueryParams, errors::ApiError, state::AppState};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

/// Media type for DoH messages (RFC 8484 §6), set on every DNS response
/// including the empty-answer ones.
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

#[instrument(skip_all, name = "doh_dns_query")]
pub async fn dns_query(
    State(state): State<AppState>,
    Query(params): Query<DnsQueryParams>,
) -> Result<Response, ApiError> {
    let Some(dns_param) = params.dns else {
        debug!("DoH request without dns parameter");
        return Ok((StatusCode::BAD_REQUEST, "Missing query in ?dns=").into_response());
    };

    let wire = state.answer_query.execute(&dns_param).await?;

    Ok(([(header::CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)], wire).into_response())
}
