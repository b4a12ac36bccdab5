pub mod findabuse;

pub use findabuse::FindAbuseClient;
