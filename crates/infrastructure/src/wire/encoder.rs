//! Query encoding (RFC 1035 §4.1).
//!
//! A query is a 12-octet header, one question, and optionally a minimal OPT
//! pseudo-record when a UDP payload size was requested. QNAMEs are emitted
//! uncompressed; a single question has nothing to point back to.

use dnsx_application::EncodeOptions;
use dnsx_domain::name::{MAX_LABEL_LEN, MAX_NAME_LEN};
use dnsx_domain::{DnsError, DnsQuery, EdnsMode, Flags, RecordType};

/// Build the wire form of one query. Returns the transaction id alongside
/// the bytes so callers can verify the response against it.
pub fn encode_query(
    query: &DnsQuery,
    options: &EncodeOptions,
) -> Result<(u16, Vec<u8>), DnsError> {
    let txid = options.txid.unwrap_or_else(|| fastrand::u16(..));

    let mut flags = Flags::query(options.recursion_desired);
    flags.authoritative = options.tweaks.authoritative;
    flags.authentic_data = options.tweaks.authentic_data;
    flags.checking_disabled = options.tweaks.checking_disabled;

    let opt_payload_size = match options.edns {
        EdnsMode::Disable => None,
        EdnsMode::Hide | EdnsMode::Show => options.tweaks.udp_payload_size,
    };
    let arcount: u16 = if opt_payload_size.is_some() { 1 } else { 0 };

    let mut buf = Vec::with_capacity(512);
    buf.extend_from_slice(&txid.to_be_bytes());
    buf.extend_from_slice(&flags.to_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    buf.extend_from_slice(&arcount.to_be_bytes());

    encode_name(&mut buf, &query.domain)?;
    buf.extend_from_slice(&query.record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&query.class.to_u16().to_be_bytes());

    if let Some(payload_size) = opt_payload_size {
        // Root name, TYPE=OPT, CLASS carries the payload size (RFC 6891).
        buf.push(0);
        buf.extend_from_slice(&RecordType::OPT.to_u16().to_be_bytes());
        buf.extend_from_slice(&payload_size.to_be_bytes());
        buf.extend_from_slice(&0u32.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
    }

    Ok((txid, buf))
}

/// Emit a QNAME: length-prefixed labels, terminated by a zero octet.
pub fn encode_name(buf: &mut Vec<u8>, name: &str) -> Result<(), DnsError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let start = buf.len();

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DnsError::InvalidDomain(name.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::InvalidLabel(label.to_string()));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    if buf.len() - start > MAX_NAME_LEN {
        return Err(DnsError::InvalidName(name.to_string()));
    }
    Ok(())
}
