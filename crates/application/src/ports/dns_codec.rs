use abuse_dns_domain::{DnsMessage, DomainError};

/// Wire-format boundary: base64url DoH payload in, raw DNS bytes out.
pub trait DnsCodec: Send + Sync {
    /// Decode the `dns` query parameter into a structured message.
    fn decode(&self, dns_param: &str) -> Result<DnsMessage, DomainError>;

    /// Serialize a constructed response to wire bytes.
    fn encode(&self, message: &DnsMessage) -> Result<Vec<u8>, DomainError>;
}
