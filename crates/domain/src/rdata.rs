use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Record payload, one variant per handled type plus an opaque catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    Ns(String),
    Ptr(String),
    Mx { preference: u16, exchange: String },
    Txt(String),
    /// Raw RDATA of any type without a dedicated variant.
    Opaque(Vec<u8>),
}

impl RData {
    pub fn kind(&self) -> &'static str {
        match self {
            RData::A(_) => "A",
            RData::Aaaa(_) => "AAAA",
            RData::Cname(_) => "CNAME",
            RData::Ns(_) => "NS",
            RData::Ptr(_) => "PTR",
            RData::Mx { .. } => "MX",
            RData::Txt(_) => "TXT",
            RData::Opaque(_) => "OPAQUE",
        }
    }
}

/// Render an IPv6 address as eight lowercase hex groups joined by `:`,
/// without zero-run compression.
fn fmt_aaaa(addr: &Ipv6Addr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for group in addr.segments() {
        if !first {
            write!(f, ":")?;
        }
        write!(f, "{:x}", group)?;
        first = false;
    }
    Ok(())
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Aaaa(addr) => fmt_aaaa(addr, f),
            RData::Cname(name) | RData::Ns(name) | RData::Ptr(name) => write!(f, "{}", name),
            RData::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RData::Txt(text) => write!(f, "\"{}\"", text),
            RData::Opaque(bytes) => {
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}
