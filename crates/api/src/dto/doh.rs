use serde::Deserialize;

/// Query-string parameters of the DoH endpoint.
#[derive(Debug, Deserialize)]
pub struct DnsQueryParams {
    pub dns: Option<String>,
}
