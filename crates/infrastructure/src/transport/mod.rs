pub mod https;
pub mod tcp;
pub mod tls;
pub mod udp;

mod dispatcher;

use async_trait::async_trait;
use dnsx_domain::{DnsError, DnsProtocol, TransportKind};
use std::time::Duration;

pub use dispatcher::TransportDispatcher;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DnsError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
    Tls(tls::TlsTransport),
    Https(https::HttpsTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DnsError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tls(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
            Self::Tls(_) => "TLS",
            Self::Https(_) => "HTTPS",
        }
    }
}

/// Build the transport that serves `kind` against the resolved nameserver.
///
/// The only cross-protocol pairing is TCP over a UDP endpoint, which the
/// truncation fallback relies on.
pub fn create_transport(kind: TransportKind, protocol: &DnsProtocol) -> Result<Transport, DnsError> {
    match (kind, protocol) {
        (TransportKind::Udp, DnsProtocol::Udp { addr }) => {
            Ok(Transport::Udp(udp::UdpTransport::new(*addr)))
        }
        (TransportKind::Tcp, DnsProtocol::Udp { addr })
        | (TransportKind::Tcp, DnsProtocol::Tcp { addr }) => {
            Ok(Transport::Tcp(tcp::TcpTransport::new(*addr)))
        }
        (TransportKind::Tls, DnsProtocol::Tls { addr, hostname }) => Ok(Transport::Tls(
            tls::TlsTransport::new(*addr, hostname.to_string()),
        )),
        (TransportKind::Https, DnsProtocol::Https { url }) => Ok(Transport::Https(
            https::HttpsTransport::new(url.to_string()),
        )),
        (kind, protocol) => Err(DnsError::TransportError(format!(
            "Transport {} is not available for nameserver {}",
            kind, protocol
        ))),
    }
}
