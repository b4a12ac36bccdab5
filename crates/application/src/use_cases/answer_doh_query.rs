use crate::ports::{AbuseContactClient, DnsCodec};
use abuse_dns_domain::{DnsMessage, DomainError, ReverseNameResolver, TxtRecord};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Answers one DoH request: decode the `dns` parameter, resolve each TXT
/// question to a canonical address, collect abuse contacts, encode.
pub struct AnswerDohQueryUseCase {
    codec: Arc<dyn DnsCodec>,
    contacts: Arc<dyn AbuseContactClient>,
    resolver: ReverseNameResolver,
}

impl AnswerDohQueryUseCase {
    pub fn new(
        codec: Arc<dyn DnsCodec>,
        contacts: Arc<dyn AbuseContactClient>,
        resolver: ReverseNameResolver,
    ) -> Self {
        Self {
            codec,
            contacts,
            resolver,
        }
    }

    /// Full pipeline for the `?dns=` parameter. Only decode failures
    /// propagate; every later anomaly degrades to an empty answer section.
    #[instrument(skip_all, name = "answer_doh_query")]
    pub async fn execute(&self, dns_param: &str) -> Result<Vec<u8>, DomainError> {
        let query = self.codec.decode(dns_param)?;
        let response = self.assemble(&query).await;

        debug!(
            id = response.id,
            questions = response.questions.len(),
            answers = response.answers.len(),
            "DoH response assembled"
        );

        self.codec.encode(&response)
    }

    /// Build the response for a decoded message. Non-query input is echoed
    /// back with an empty answer section and no upstream work.
    pub async fn assemble(&self, query: &DnsMessage) -> DnsMessage {
        let mut response = DnsMessage::response_to(query);

        if !query.is_query {
            debug!(id = query.id, "Non-query message, echoing empty response");
            return response;
        }

        for question in &query.questions {
            if !question.qtype.is_txt() {
                continue;
            }

            let Some(address) = self.resolver.resolve(&question.name) else {
                debug!(name = %question.name, "Not a reverse-lookup name");
                continue;
            };

            match self.contacts.lookup(address).await {
                Ok(contacts) => {
                    debug!(
                        name = %question.name,
                        address = %address,
                        contacts = contacts.len(),
                        "Abuse contacts resolved"
                    );
                    for contact in contacts {
                        response
                            .answers
                            .push(TxtRecord::new(question.name.clone(), contact));
                    }
                }
                Err(e) => {
                    // DNS has no channel for "upstream degraded": this
                    // question answers with nothing, the response stays valid.
                    warn!(address = %address, error = %e, "Abuse contact lookup failed");
                }
            }
        }

        response
    }
}
