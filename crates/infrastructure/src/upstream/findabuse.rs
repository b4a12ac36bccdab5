//! findabuse.email directory client
//!
//! One HTTP GET per lookup against `https://{host}/api/v1/{address}`. The
//! JSON body maps the queried address to an [`AbuseRecord`]; anything the
//! directory does not know comes back as an empty contact list, not an error.

use abuse_dns_application::ports::AbuseContactClient;
use abuse_dns_domain::{AbuseRecord, DomainError};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Caching hint forwarded to whatever edge fronts the directory; the
/// responder itself never caches.
const CACHE_MAX_AGE_SECS: u64 = 84_600;

pub struct FindAbuseClient {
    host: String,
}

impl FindAbuseClient {
    pub fn new(host: String) -> Self {
        Self { host }
    }

    fn lookup_url(&self, address: IpAddr) -> String {
        format!("https://{}/api/v1/{}", self.host, address)
    }
}

#[async_trait]
impl AbuseContactClient for FindAbuseClient {
    async fn lookup(&self, address: IpAddr) -> Result<Vec<String>, DomainError> {
        let url = self.lookup_url(address);
        debug!(url = %url, "Querying abuse-contact directory");

        let response = SHARED_CLIENT
            .get(&url)
            .header(CACHE_CONTROL, format!("max-age={}", CACHE_MAX_AGE_SECS))
            .send()
            .await
            .map_err(|e| DomainError::UpstreamTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        let payload: HashMap<String, AbuseRecord> = response
            .json()
            .await
            .map_err(|e| DomainError::UpstreamPayload(e.to_string()))?;

        let contacts = extract_contacts(&payload, &address.to_string());
        debug!(
            address = %address,
            contacts = contacts.len(),
            "Directory lookup complete"
        );

        Ok(contacts)
    }
}

/// Missing entry, `success: false`, and an absent/empty list all normalize
/// to the empty contact list.
fn extract_contacts(payload: &HashMap<String, AbuseRecord>, address: &str) -> Vec<String> {
    payload
        .get(address)
        .map(|record| record.abuse_contacts().to_vec())
        .unwrap_or_default()
}
