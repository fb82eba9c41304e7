//! DNS-over-TLS transport (RFC 7858, port 853).
//!
//! TCP framing over a verified TLS session. Certificates are checked
//! against the webpki root store; an untrusted peer fails the query.

use super::tcp::{read_with_length_prefix, send_with_length_prefix};
use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsx_domain::DnsError;
use rustls::pki_types::ServerName;
use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::debug;

static SHARED_TLS_CONFIG: LazyLock<Arc<rustls::ClientConfig>> = LazyLock::new(|| {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Arc::new(config)
});

pub struct TlsTransport {
    server_addr: SocketAddr,
    hostname: String,
}

impl TlsTransport {
    pub fn new(server_addr: SocketAddr, hostname: String) -> Self {
        Self {
            server_addr,
            hostname,
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TlsStream<TcpStream>, DnsError> {
        let connector = tokio_rustls::TlsConnector::from(SHARED_TLS_CONFIG.clone());

        let server_name = ServerName::try_from(self.hostname.clone()).map_err(|e| {
            DnsError::TransportError(format!("Invalid TLS hostname '{}': {}", self.hostname, e))
        })?;

        let tcp_stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| DnsError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| {
                DnsError::TransportError(format!(
                    "Connection refused by TLS server {}: {}",
                    self.server_addr, e
                ))
            })?;

        let tls_stream = tokio::time::timeout(timeout, connector.connect(server_name, tcp_stream))
            .await
            .map_err(|_| DnsError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| classify_handshake_error(&self.server_addr, e))?;

        debug!(server = %self.server_addr, hostname = %self.hostname, "TLS connection established");
        Ok(tls_stream)
    }
}

/// Certificate problems surface as authentication failures; anything else
/// is an ordinary transport error.
fn classify_handshake_error(server: &SocketAddr, error: std::io::Error) -> DnsError {
    let text = error.to_string();
    let lowered = text.to_lowercase();
    if lowered.contains("certificate") || lowered.contains("handshake") {
        DnsError::TlsAuthFailed(format!("{}: {}", server, text))
    } else {
        DnsError::TransportError(format!("TLS connection to {} failed: {}", server, text))
    }
}

#[async_trait]
impl DnsTransport for TlsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DnsError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| DnsError::TransportTimeout {
                server: self.server_addr.to_string(),
            })??;

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| DnsError::TransportTimeout {
                server: self.server_addr.to_string(),
            })??;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TLS response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TLS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TLS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_transport_creation() {
        let transport = TlsTransport::new(
            "1.1.1.1:853".parse().unwrap(),
            "cloudflare-dns.com".to_string(),
        );
        assert_eq!(transport.protocol_name(), "TLS");
    }
}
