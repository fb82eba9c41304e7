use crate::flags::Flags;
use crate::rdata::RData;
use crate::record_type::RecordType;

/// One decoded resource record.
///
/// Type and class stay numeric so records of types this client does not
/// model still round-trip through decoding and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: RData,
}

impl DnsRecord {
    pub fn is_opt(&self) -> bool {
        self.rtype == RecordType::OPT.to_u16()
    }
}

/// A decoded response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub flags: Flags,
    pub answers: Vec<DnsRecord>,
    pub authorities: Vec<DnsRecord>,
    pub additionals: Vec<DnsRecord>,
}

impl DnsResponse {
    pub fn rcode(&self) -> u8 {
        self.flags.rcode
    }

    pub fn is_truncated(&self) -> bool {
        self.flags.truncated
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }
}
