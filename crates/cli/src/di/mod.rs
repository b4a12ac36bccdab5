use abuse_dns_application::AnswerDohQueryUseCase;
use abuse_dns_domain::{Config, ReverseNameResolver, ReverseSuffixTable};
use abuse_dns_infrastructure::{FindAbuseClient, WireCodec};
use std::sync::Arc;

/// Wires the adapters into the use case.
pub struct Services {
    pub answer_query: Arc<AnswerDohQueryUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let codec = Arc::new(WireCodec);
        let directory = Arc::new(FindAbuseClient::new(config.upstream.host.clone()));
        let resolver = ReverseNameResolver::new(ReverseSuffixTable::default());

        Self {
            answer_query: Arc::new(AnswerDohQueryUseCase::new(codec, directory, resolver)),
        }
    }
}
