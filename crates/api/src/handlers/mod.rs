pub mod doh;
pub mod meta;

pub use doh::dns_query;
pub use meta::{not_found, version, welcome};
