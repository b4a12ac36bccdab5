//! Reverse-lookup name conventions
//!
//! A query name encodes an IP address either as the literal address in front
//! of a bespoke suffix (`1.2.3.4.dns.findabuse.email`) or as a standard
//! PTR-zone name (`4.3.2.1.in-addr.arpa`, nibble form under `ip6.arpa`).
//! The resolver recovers the canonical address from either convention.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// How the subject in front of a recognized suffix encodes the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseScheme {
    /// The subject is the IP literal itself, no reversal.
    Literal,
    /// PTR-zone arithmetic: reversed octets (v4) or reversed nibbles (v6).
    PtrZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressFamily {
    V4,
    V6,
}

#[derive(Debug, Clone, Copy)]
struct ReverseSuffix {
    suffix: &'static str,
    scheme: ReverseScheme,
}

/// The recognized suffixes per address family, in matching order.
/// Constructed once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReverseSuffixTable {
    v4: Vec<ReverseSuffix>,
    v6: Vec<ReverseSuffix>,
}

impl Default for ReverseSuffixTable {
    fn default() -> Self {
        Self {
            v4: vec![
                ReverseSuffix {
                    suffix: "in-addr.arpa",
                    scheme: ReverseScheme::PtrZone,
                },
                ReverseSuffix {
                    suffix: "dns.findabuse.email",
                    scheme: ReverseScheme::Literal,
                },
            ],
            v6: vec![
                ReverseSuffix {
                    suffix: "ip6.arpa",
                    scheme: ReverseScheme::PtrZone,
                },
                ReverseSuffix {
                    suffix: "dns6.findabuse.email",
                    scheme: ReverseScheme::Literal,
                },
            ],
        }
    }
}

pub struct ReverseNameResolver {
    table: ReverseSuffixTable,
}

impl ReverseNameResolver {
    pub fn new(table: ReverseSuffixTable) -> Self {
        Self { table }
    }

    /// Recover the canonical address encoded in `question_name`, or `None`
    /// when the name does not follow any recognized reverse-lookup
    /// convention. Families are tried in order 4 then 6; the first matching
    /// suffix wins and its decoding is final.
    pub fn resolve(&self, question_name: &str) -> Option<IpAddr> {
        let name = question_name.trim_end_matches('.').to_ascii_lowercase();

        let families = [
            (AddressFamily::V4, &self.table.v4),
            (AddressFamily::V6, &self.table.v6),
        ];
        for (family, suffixes) in families {
            for entry in suffixes {
                if let Some(subject) = strip_reverse_suffix(&name, entry.suffix) {
                    return decode_subject(subject, family, entry.scheme);
                }
            }
        }
        None
    }
}

/// The name must end with `.` + `suffix` and leave a non-empty subject.
fn strip_reverse_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let subject = name.strip_suffix(suffix)?.strip_suffix('.')?;
    (!subject.is_empty()).then_some(subject)
}

fn decode_subject(subject: &str, family: AddressFamily, scheme: ReverseScheme) -> Option<IpAddr> {
    match (scheme, family) {
        (ReverseScheme::Literal, AddressFamily::V4) => {
            subject.parse::<Ipv4Addr>().ok().map(IpAddr::V4)
        }
        (ReverseScheme::Literal, AddressFamily::V6) => {
            subject.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
        }
        (ReverseScheme::PtrZone, AddressFamily::V4) => decode_v4_ptr(subject),
        (ReverseScheme::PtrZone, AddressFamily::V6) => decode_v6_ptr(subject),
    }
}

/// `4.3.2.1` -> `1.2.3.4`. Exactly four labels; the `Ipv4Addr` parse is the
/// octet range and leading-zero check.
fn decode_v4_ptr(subject: &str) -> Option<IpAddr> {
    let labels: Vec<&str> = subject.split('.').collect();
    if labels.len() != 4 {
        return None;
    }
    let dotted = labels.iter().rev().copied().collect::<Vec<_>>().join(".");
    dotted.parse::<Ipv4Addr>().ok().map(IpAddr::V4)
}

/// 32 reversed single-nibble labels -> `Ipv6Addr`, whose display form is the
/// compressed canonical literal.
fn decode_v6_ptr(subject: &str) -> Option<IpAddr> {
    let labels: Vec<&str> = subject.split('.').collect();
    if labels.len() != 32 {
        return None;
    }
    let mut groups = String::with_capacity(39);
    for (i, label) in labels.iter().rev().enumerate() {
        if label.len() != 1 || !label.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        if i > 0 && i % 4 == 0 {
            groups.push(':');
        }
        groups.push_str(label);
    }
    groups.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
}
