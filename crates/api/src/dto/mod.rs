mod doh;

pub use doh::DnsQueryParams;
