//! Abuse DNS Domain Layer
pub mod abuse_record;
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod reverse_name;

pub use abuse_record::{AbuseContacts, AbuseRecord};
pub use config::{CliOverrides, Config};
pub use dns_message::{DnsMessage, Question, QuestionType, TxtRecord, ANSWER_TTL};
pub use errors::DomainError;
pub use reverse_name::{ReverseNameResolver, ReverseScheme, ReverseSuffixTable};
