//! Nameserver discovery from caller options and OS state.

use dnsx_domain::{DnsError, DnsProtocol, TransportKind, DNS_PORT, DOT_PORT};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tracing::{debug, warn};

/// Used when nothing else can be discovered.
pub const FALLBACK_NAMESERVER: Ipv4Addr = Ipv4Addr::new(1, 1, 1, 1);

#[cfg(unix)]
const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Resolve the nameserver endpoint for the selected transport.
///
/// An explicit caller string wins; otherwise the system resolver
/// configuration is consulted, and `1.1.1.1` backstops everything.
pub fn resolve_nameserver(
    explicit: Option<&str>,
    kind: TransportKind,
) -> Result<DnsProtocol, DnsError> {
    if kind == TransportKind::Https {
        // Option validation has already required the https:// prefix.
        let url = explicit.ok_or(DnsError::HttpsRequiresUrl)?;
        if !url.starts_with("https://") {
            return Err(DnsError::HttpsRequiresUrl);
        }
        return Ok(DnsProtocol::Https { url: url.into() });
    }

    let default_port = match kind {
        TransportKind::Tls => DOT_PORT,
        _ => DNS_PORT,
    };

    let addr = match explicit {
        Some(text) => match parse_ipv4_nameserver(text, default_port) {
            Some(addr) => addr,
            None => {
                // Only dotted-quad IPv4 (optionally :port) is accepted here;
                // IPv6 literals and hostnames fall back to the default.
                warn!(
                    nameserver = text,
                    "Nameserver is not an IPv4 literal, using default"
                );
                SocketAddr::V4(SocketAddrV4::new(system_nameserver(), default_port))
            }
        },
        None => SocketAddr::V4(SocketAddrV4::new(system_nameserver(), default_port)),
    };

    Ok(match kind {
        TransportKind::Udp => DnsProtocol::Udp { addr },
        TransportKind::Tcp => DnsProtocol::Tcp { addr },
        TransportKind::Tls => DnsProtocol::Tls {
            addr,
            hostname: addr.ip().to_string().into(),
        },
        TransportKind::Https => unreachable!("handled above"),
    })
}

/// Parse `a.b.c.d` or `a.b.c.d:port`.
pub fn parse_ipv4_nameserver(text: &str, default_port: u16) -> Option<SocketAddr> {
    if let Some((host, port_str)) = text.rsplit_once(':') {
        let host: Ipv4Addr = host.parse().ok()?;
        let port: u16 = port_str.parse().ok()?;
        return Some(SocketAddr::V4(SocketAddrV4::new(host, port)));
    }
    let host: Ipv4Addr = text.parse().ok()?;
    Some(SocketAddr::V4(SocketAddrV4::new(host, default_port)))
}

/// The first usable IPv4 resolver from system configuration.
#[cfg(unix)]
pub fn system_nameserver() -> Ipv4Addr {
    match std::fs::read_to_string(RESOLV_CONF_PATH) {
        Ok(content) => match parse_resolv_conf(&content) {
            Some(addr) => {
                debug!(nameserver = %addr, "Nameserver picked from resolv.conf");
                addr
            }
            None => FALLBACK_NAMESERVER,
        },
        Err(e) => {
            debug!(error = %e, "Could not read resolv.conf, using default");
            FALLBACK_NAMESERVER
        }
    }
}

#[cfg(not(unix))]
pub fn system_nameserver() -> Ipv4Addr {
    FALLBACK_NAMESERVER
}

/// Pick the first IPv4 `nameserver` entry. Entries carrying a `%` zone id
/// (link-local IPv6) are skipped.
pub fn parse_resolv_conf(content: &str) -> Option<Ipv4Addr> {
    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("nameserver") else {
            continue;
        };
        let Some(entry) = rest.split_whitespace().next() else {
            continue;
        };
        if entry.contains('%') {
            continue;
        }
        if let Ok(addr) = entry.parse::<Ipv4Addr>() {
            return Some(addr);
        }
    }
    None
}
