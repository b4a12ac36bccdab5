use abuse_dns_domain::DomainError;
use async_trait::async_trait;
use std::net::IpAddr;

/// The upstream abuse-contact directory, keyed by canonical address.
///
/// An empty list is the normal "nothing known" outcome. Errors are transport
/// or payload failures; callers decide whether those abort anything.
#[async_trait]
pub trait AbuseContactClient: Send + Sync {
    async fn lookup(&self, address: IpAddr) -> Result<Vec<String>, DomainError>;
}
