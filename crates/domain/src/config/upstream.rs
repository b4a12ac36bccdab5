use serde::{Deserialize, Serialize};

/// The abuse-contact directory queried for every resolved address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

fn default_host() -> String {
    "api.findabuse.email".to_string()
}
