mod abuse_contact_client;
mod dns_codec;

pub use abuse_contact_client::AbuseContactClient;
pub use dns_codec::DnsCodec;
