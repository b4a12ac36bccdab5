//! DNS wire-format codec for DoH payloads
//!
//! Decodes the base64url `dns` query parameter into a structured message
//! using `hickory-proto`, and serializes constructed responses back to wire
//! bytes. Type and class filtering is assembly policy, not a codec concern;
//! the only class restriction enforced here is IN.

use abuse_dns_application::ports::DnsCodec;
use abuse_dns_domain::{DnsMessage, DomainError, Question, QuestionType};
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

/// RFC 8484 payloads are base64url without padding, but clients disagree on
/// the padding detail; accept both on decode.
const DOH_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// DNS wire format in and out of the DoH surface.
pub struct WireCodec;

impl WireCodec {
    /// Normalized question name: lowercase, no trailing dot.
    fn normalize_name(name: &str) -> String {
        name.trim_end_matches('.').to_ascii_lowercase()
    }
}

impl DnsCodec for WireCodec {
    fn decode(&self, dns_param: &str) -> Result<DnsMessage, DomainError> {
        let bytes = DOH_BASE64
            .decode(dns_param)
            .map_err(|e| DomainError::InvalidBase64(e.to_string()))?;

        let message = Message::from_vec(&bytes)
            .map_err(|e| DomainError::MalformedPacket(e.to_string()))?;

        let mut questions = Vec::with_capacity(message.queries().len());
        for query in message.queries() {
            if query.query_class() != DNSClass::IN {
                return Err(DomainError::MalformedPacket(format!(
                    "unsupported record class {:?}",
                    query.query_class()
                )));
            }

            let qtype = match query.query_type() {
                RecordType::TXT => QuestionType::Txt,
                other => QuestionType::Other(u16::from(other)),
            };
            questions.push(Question::new(
                Self::normalize_name(&query.name().to_utf8()),
                qtype,
            ));
        }

        // Answer/authority/additional sections in the query are ignored.
        Ok(DnsMessage {
            id: message.id(),
            is_query: message.message_type() == MessageType::Query,
            authoritative: message.authoritative(),
            questions,
            answers: Vec::new(),
        })
    }

    fn encode(&self, msg: &DnsMessage) -> Result<Vec<u8>, DomainError> {
        let message_type = if msg.is_query {
            MessageType::Query
        } else {
            MessageType::Response
        };
        let mut message = Message::new(msg.id, message_type, OpCode::Query);
        message.set_authoritative(msg.authoritative);

        for question in &msg.questions {
            let name = Name::from_utf8(&question.name)
                .map_err(|e| DomainError::MalformedPacket(e.to_string()))?;
            let mut query = Query::new();
            query.set_name(name);
            query.set_query_type(match question.qtype {
                QuestionType::Txt => RecordType::TXT,
                QuestionType::Other(code) => RecordType::from(code),
            });
            query.set_query_class(DNSClass::IN);
            message.add_query(query);
        }

        for answer in &msg.answers {
            let name = Name::from_utf8(&answer.name)
                .map_err(|e| DomainError::MalformedPacket(e.to_string()))?;
            let rdata = RData::TXT(TXT::new(vec![answer.data.clone()]));
            message.add_answer(Record::from_rdata(name, answer.ttl, rdata));
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::MalformedPacket(format!("Failed to serialize: {}", e)))?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abuse_dns_domain::TxtRecord;
    use std::str::FromStr;

    fn build_txt_query(id: u16, name: &str) -> Vec<u8> {
        let mut query = Query::new();
        query.set_name(Name::from_str(name).unwrap());
        query.set_query_type(RecordType::TXT);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();
        buf
    }

    #[test]
    fn test_decode_txt_query() {
        let wire = build_txt_query(0x1234, "4.3.2.1.in-addr.arpa.");
        let param = DOH_BASE64.encode(&wire);

        let decoded = WireCodec.decode(&param).unwrap();
        assert_eq!(decoded.id, 0x1234);
        assert!(decoded.is_query);
        assert_eq!(decoded.questions.len(), 1);
        assert_eq!(decoded.questions[0].name, "4.3.2.1.in-addr.arpa");
        assert_eq!(decoded.questions[0].qtype, QuestionType::Txt);
    }

    #[test]
    fn test_decode_accepts_padded_base64() {
        let wire = build_txt_query(1, "example.com.");
        let padded = base64::engine::general_purpose::URL_SAFE.encode(&wire);

        assert!(WireCodec.decode(&padded).is_ok());
    }

    #[test]
    fn test_decode_normalizes_name_case() {
        let wire = build_txt_query(1, "1.2.3.4.DNS.FINDABUSE.EMAIL.");
        let param = DOH_BASE64.encode(&wire);

        let decoded = WireCodec.decode(&param).unwrap();
        assert_eq!(decoded.questions[0].name, "1.2.3.4.dns.findabuse.email");
    }

    #[test]
    fn test_decode_maps_non_txt_types_to_other() {
        let mut query = Query::new();
        query.set_name(Name::from_str("example.com.").unwrap());
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);
        let mut message = Message::new(7, MessageType::Query, OpCode::Query);
        message.add_query(query);
        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();

        let decoded = WireCodec.decode(&DOH_BASE64.encode(&buf)).unwrap();
        assert_eq!(decoded.questions[0].qtype, QuestionType::Other(1));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = WireCodec.decode("!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, DomainError::InvalidBase64(_)));
    }

    #[test]
    fn test_decode_rejects_truncated_packet() {
        // A valid base64 string hiding a truncated DNS header
        let param = DOH_BASE64.encode([0u8; 5]);
        let err = WireCodec.decode(&param).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPacket(_)));
    }

    #[test]
    fn test_decode_rejects_non_in_class() {
        let mut query = Query::new();
        query.set_name(Name::from_str("example.com.").unwrap());
        query.set_query_type(RecordType::TXT);
        query.set_query_class(DNSClass::CH);
        let mut message = Message::new(9, MessageType::Query, OpCode::Query);
        message.add_query(query);
        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();

        let err = WireCodec.decode(&DOH_BASE64.encode(&buf)).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPacket(_)));
    }

    #[test]
    fn test_decode_flags_response_packets() {
        let mut message = Message::new(3, MessageType::Response, OpCode::Query);
        message.set_authoritative(true);
        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();

        let decoded = WireCodec.decode(&DOH_BASE64.encode(&buf)).unwrap();
        assert!(!decoded.is_query);
        assert!(decoded.authoritative);
    }

    #[test]
    fn test_encode_response_round_trips_through_hickory() {
        let query = WireCodec
            .decode(&DOH_BASE64.encode(build_txt_query(0xbeef, "4.3.2.1.in-addr.arpa.")))
            .unwrap();

        let mut response = DnsMessage::response_to(&query);
        response
            .answers
            .push(TxtRecord::new("4.3.2.1.in-addr.arpa", "a@x.com"));
        response
            .answers
            .push(TxtRecord::new("4.3.2.1.in-addr.arpa", "b@y.com"));

        let wire = WireCodec.encode(&response).unwrap();
        let parsed = Message::from_vec(&wire).unwrap();

        assert_eq!(parsed.id(), 0xbeef);
        assert_eq!(parsed.message_type(), MessageType::Response);
        assert!(parsed.authoritative());
        assert_eq!(parsed.queries().len(), 1);
        assert_eq!(parsed.answers().len(), 2);

        let expected = ["a@x.com", "b@y.com"];
        for (record, contact) in parsed.answers().iter().zip(expected) {
            assert_eq!(record.record_type(), RecordType::TXT);
            assert_eq!(record.dns_class(), DNSClass::IN);
            assert_eq!(record.ttl(), 300);
            match record.data() {
                RData::TXT(txt) => {
                    let data: Vec<u8> = txt.txt_data().iter().flat_map(|s| s.to_vec()).collect();
                    assert_eq!(data, contact.as_bytes());
                }
                other => panic!("expected TXT rdata, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_encode_empty_answer_response() {
        let query = WireCodec
            .decode(&DOH_BASE64.encode(build_txt_query(42, "example.com.")))
            .unwrap();

        let response = DnsMessage::response_to(&query);
        let wire = WireCodec.encode(&response).unwrap();
        let parsed = Message::from_vec(&wire).unwrap();

        assert_eq!(parsed.id(), 42);
        assert!(parsed.answers().is_empty());
        assert_eq!(parsed.queries().len(), 1);
    }
}
