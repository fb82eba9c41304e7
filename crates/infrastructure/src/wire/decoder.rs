//! Response decoding (RFC 1035 §4.1), including §4.1.4 name compression.
//!
//! The decoder borrows the response buffer for the duration of the parse;
//! names reached through compression pointers are materialised as owned
//! strings so the buffer can be dropped afterwards.

use dnsx_domain::name::MAX_NAME_LEN;
use dnsx_domain::{DnsError, DnsRecord, DnsResponse, Flags, RData, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_u16(&mut self) -> Result<u16, DnsError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, DnsError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DnsError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or(DnsError::TruncatedPacket)?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

/// Parse a full response message.
pub fn decode_response(bytes: &[u8]) -> Result<DnsResponse, DnsError> {
    if bytes.len() < 12 {
        return Err(DnsError::TruncatedPacket);
    }

    let mut reader = Reader::new(bytes);
    let id = reader.read_u16()?;
    let flag_bytes = reader.take(2)?;
    let flags = Flags::from_bytes([flag_bytes[0], flag_bytes[1]]);
    if !flags.response {
        return Err(DnsError::NotAResponse);
    }

    let qdcount = reader.read_u16()?;
    let ancount = reader.read_u16()?;
    let nscount = reader.read_u16()?;
    let arcount = reader.read_u16()?;

    // Questions are advanced past but not surfaced.
    for _ in 0..qdcount {
        read_name(&mut reader)?;
        reader.take(4)?;
    }

    let answers = read_records(&mut reader, ancount)?;
    let authorities = read_records(&mut reader, nscount)?;
    let additionals = read_records(&mut reader, arcount)?;

    Ok(DnsResponse {
        id,
        flags,
        answers,
        authorities,
        additionals,
    })
}

fn read_records(reader: &mut Reader<'_>, count: u16) -> Result<Vec<DnsRecord>, DnsError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_record(reader)?);
    }
    Ok(records)
}

fn read_record(reader: &mut Reader<'_>) -> Result<DnsRecord, DnsError> {
    let name = read_name(reader)?;

    // Fixed 10-octet preamble: TYPE, CLASS, TTL, RDLENGTH.
    let preamble_start = reader.pos;
    let rtype = reader.read_u16()?;
    let class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()? as usize;

    if reader.pos + rdlength > reader.buf.len() {
        return Err(DnsError::TruncatedPacket);
    }

    let data = read_rdata(reader, rtype, rdlength)?;

    // Every record must consume exactly its declared RDATA.
    if reader.pos != preamble_start + 10 + rdlength {
        return Err(DnsError::InvalidFormat(format!(
            "record for {} consumed {} of {} RDATA octets",
            name,
            reader.pos - preamble_start - 10,
            rdlength
        )));
    }

    Ok(DnsRecord {
        name,
        rtype,
        class,
        ttl,
        data,
    })
}

fn read_rdata(reader: &mut Reader<'_>, rtype: u16, rdlength: usize) -> Result<RData, DnsError> {
    match RecordType::from_u16(rtype) {
        Some(RecordType::A) => {
            if rdlength != 4 {
                return Err(DnsError::InvalidLength {
                    rtype,
                    expected: 4,
                    actual: rdlength,
                });
            }
            let octets = reader.take(4)?;
            Ok(RData::A(Ipv4Addr::new(
                octets[0], octets[1], octets[2], octets[3],
            )))
        }
        Some(RecordType::AAAA) => {
            if rdlength != 16 {
                return Err(DnsError::InvalidLength {
                    rtype,
                    expected: 16,
                    actual: rdlength,
                });
            }
            let octets = reader.take(16)?;
            let mut addr = [0u8; 16];
            addr.copy_from_slice(octets);
            Ok(RData::Aaaa(Ipv6Addr::from(addr)))
        }
        Some(RecordType::CNAME) => Ok(RData::Cname(read_name(reader)?)),
        Some(RecordType::NS) => Ok(RData::Ns(read_name(reader)?)),
        Some(RecordType::PTR) => Ok(RData::Ptr(read_name(reader)?)),
        Some(RecordType::MX) => {
            let preference = reader.read_u16()?;
            let exchange = read_name(reader)?;
            Ok(RData::Mx {
                preference,
                exchange,
            })
        }
        Some(RecordType::TXT) => {
            let end = reader.pos + rdlength;
            let mut text = Vec::with_capacity(rdlength);
            while reader.pos < end {
                let len = reader.take(1)?[0] as usize;
                if reader.pos + len > end {
                    return Err(DnsError::TruncatedPacket);
                }
                text.extend_from_slice(reader.take(len)?);
            }
            Ok(RData::Txt(escape_text(&text)))
        }
        _ => Ok(RData::Opaque(reader.take(rdlength)?.to_vec())),
    }
}

/// Decode a possibly-compressed name starting at the reader's cursor.
///
/// The cursor advances past the in-stream portion only: once a pointer is
/// followed, it stops after the pointer's second octet. Pointers must aim
/// strictly backwards, which bounds every chain.
fn read_name(reader: &mut Reader<'_>) -> Result<String, DnsError> {
    let buf = reader.buf;
    let mut labels: Vec<String> = Vec::new();
    let mut encoded_len = 1usize;
    let mut pos = reader.pos;
    let mut jumped = false;

    loop {
        let len = *buf.get(pos).ok_or(DnsError::TruncatedPacket)? as usize;
        match len & 0b1100_0000 {
            0b0000_0000 => {
                if len == 0 {
                    pos += 1;
                    if !jumped {
                        reader.pos = pos;
                    }
                    break;
                }
                let end = pos + 1 + len;
                if end > buf.len() {
                    return Err(DnsError::TruncatedPacket);
                }
                encoded_len += 1 + len;
                if encoded_len > MAX_NAME_LEN {
                    return Err(DnsError::InvalidName(format!(
                        "name exceeds {} octets",
                        MAX_NAME_LEN
                    )));
                }
                labels.push(String::from_utf8_lossy(&buf[pos + 1..end]).into_owned());
                pos = end;
            }
            0b1100_0000 => {
                let second = *buf.get(pos + 1).ok_or(DnsError::TruncatedPacket)? as usize;
                let target = ((len & 0b0011_1111) << 8) | second;
                // Forward or self references would loop; reject them.
                if target >= pos {
                    return Err(DnsError::InvalidPointer);
                }
                if !jumped {
                    reader.pos = pos + 2;
                    jumped = true;
                }
                pos = target;
            }
            _ => {
                return Err(DnsError::InvalidLabel(format!(
                    "reserved label tag {:#04x}",
                    len
                )));
            }
        }
    }

    if labels.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(labels.join("."))
    }
}

/// Render TXT octets without assuming an encoding: printable ASCII passes
/// through, everything else becomes a `\DDD` decimal escape.
fn escape_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        if (0x20..0x7f).contains(&byte) && byte != b'\\' && byte != b'"' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("\\{:03}", byte));
        }
    }
    out
}
