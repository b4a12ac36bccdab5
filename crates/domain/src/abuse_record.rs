use serde::Deserialize;

/// One entry of the abuse-contact directory payload, keyed by the queried
/// address. Every field tolerates absence: the upstream omits sections
/// freely for addresses it knows nothing about.
#[derive(Debug, Clone, Deserialize)]
pub struct AbuseRecord {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub contacts: AbuseContacts,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbuseContacts {
    #[serde(default)]
    pub abuse: Vec<String>,
}

impl AbuseRecord {
    /// The contact list this record publishes: empty unless the upstream
    /// marked the entry successful. An empty list is the normal
    /// "nothing known" outcome, not an error.
    pub fn abuse_contacts(&self) -> &[String] {
        if self.success {
            &self.contacts.abuse
        } else {
            &[]
        }
    }
}
