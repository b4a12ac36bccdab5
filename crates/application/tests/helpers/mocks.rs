#![allow(dead_code)]

use abuse_dns_application::ports::{AbuseContactClient, DnsCodec};
use abuse_dns_domain::{DnsMessage, DomainError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Codec stand-in for tests that drive `assemble` directly.
pub struct NullCodec;

impl DnsCodec for NullCodec {
    fn decode(&self, dns_param: &str) -> Result<DnsMessage, DomainError> {
        Err(DomainError::InvalidBase64(dns_param.to_string()))
    }

    fn encode(&self, _message: &DnsMessage) -> Result<Vec<u8>, DomainError> {
        Ok(Vec::new())
    }
}

#[derive(Clone, Default)]
pub struct MockAbuseContactClient {
    responses: Arc<Mutex<HashMap<IpAddr, Result<Vec<String>, DomainError>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAbuseContactClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_contacts(&self, address: &str, contacts: &[&str]) {
        self.responses.lock().unwrap().insert(
            address.parse().unwrap(),
            Ok(contacts.iter().map(|c| c.to_string()).collect()),
        );
    }

    pub fn set_error(&self, address: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(address.parse().unwrap(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AbuseContactClient for MockAbuseContactClient {
    async fn lookup(&self, address: IpAddr) -> Result<Vec<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(&address)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
