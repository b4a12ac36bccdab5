/// TTL applied to every emitted TXT answer, independent of upstream freshness.
pub const ANSWER_TTL: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionType {
    Txt,
    Other(u16),
}

impl QuestionType {
    pub fn is_txt(&self) -> bool {
        matches!(self, QuestionType::Txt)
    }
}

/// A question from the decoded query. Class is IN by construction: the wire
/// codec rejects any other class at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Normalized name: lowercase, dot-separated labels, no trailing dot.
    pub name: String,
    pub qtype: QuestionType,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: QuestionType) -> Self {
        Self {
            name: name.into(),
            qtype,
        }
    }
}

/// A TXT answer record, class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub name: String,
    pub ttl: u32,
    pub data: String,
}

impl TxtRecord {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: ANSWER_TTL,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsMessage {
    pub id: u16,
    /// Wire QR bit: true for a decoded query, false for a constructed response.
    pub is_query: bool,
    /// Authoritative-Answer flag, set on every constructed response.
    pub authoritative: bool,
    pub questions: Vec<Question>,
    pub answers: Vec<TxtRecord>,
}

impl DnsMessage {
    pub fn query(id: u16, questions: Vec<Question>) -> Self {
        Self {
            id,
            is_query: true,
            authoritative: false,
            questions,
            answers: Vec::new(),
        }
    }

    /// Response shell for a decoded message: id copied, questions echoed
    /// unchanged, Authoritative-Answer set, answer section empty.
    pub fn response_to(query: &DnsMessage) -> Self {
        Self {
            id: query.id,
            is_query: false,
            authoritative: true,
            questions: query.questions.clone(),
            answers: Vec::new(),
        }
    }
}
