use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

pub const DNS_PORT: u16 = 53;
pub const DOT_PORT: u16 = 853;

/// Which transport drives the request→reply exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Udp,
    Tcp,
    Tls,
    Https,
}

impl TransportKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransportKind::Udp => "UDP",
            TransportKind::Tcp => "TCP",
            TransportKind::Tls => "TLS",
            TransportKind::Https => "HTTPS",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            TransportKind::Udp | TransportKind::Tcp => DNS_PORT,
            TransportKind::Tls => DOT_PORT,
            // DoH carries its port inside the URL.
            TransportKind::Https => 443,
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete nameserver endpoint, resolved from options or system state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsProtocol {
    Udp { addr: SocketAddr },
    Tcp { addr: SocketAddr },
    Tls { addr: SocketAddr, hostname: Arc<str> },
    Https { url: Arc<str> },
}

impl DnsProtocol {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            DnsProtocol::Udp { addr } | DnsProtocol::Tcp { addr } => Some(*addr),
            DnsProtocol::Tls { addr, .. } => Some(*addr),
            DnsProtocol::Https { .. } => None,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Udp { .. } => "UDP",
            DnsProtocol::Tcp { .. } => "TCP",
            DnsProtocol::Tls { .. } => "TLS",
            DnsProtocol::Https { .. } => "HTTPS",
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            DnsProtocol::Udp { .. } => TransportKind::Udp,
            DnsProtocol::Tcp { .. } => TransportKind::Tcp,
            DnsProtocol::Tls { .. } => TransportKind::Tls,
            DnsProtocol::Https { .. } => TransportKind::Https,
        }
    }

    /// The endpoint with the transport swapped, keeping the address.
    /// Used for the truncation fallback from UDP to TCP.
    pub fn as_tcp(&self) -> Self {
        match self {
            DnsProtocol::Udp { addr } => DnsProtocol::Tcp { addr: *addr },
            other => other.clone(),
        }
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProtocol::Udp { addr } => write!(f, "udp://{}", addr),
            DnsProtocol::Tcp { addr } => write!(f, "tcp://{}", addr),
            DnsProtocol::Tls { addr, hostname } => {
                write!(f, "tls://{}:{}", hostname, addr.port())
            }
            DnsProtocol::Https { url } => write!(f, "{}", url),
        }
    }
}
