//! Abuse DNS Infrastructure Layer
pub mod dns;
pub mod upstream;

pub use dns::WireCodec;
pub use upstream::FindAbuseClient;
