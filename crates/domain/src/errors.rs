use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(String),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Invalid upstream payload: {0}")]
    UpstreamPayload(String),
}

impl DomainError {
    /// Client-input failures that abort the request with HTTP 400.
    /// Everything else degrades to an empty answer section.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidBase64(_) | DomainError::MalformedPacket(_)
        )
    }
}
