//! DNS-over-HTTPS transport (RFC 8484).
//!
//! Queries go out as HTTP POST with `application/dns-message` bodies; the
//! reply body is the raw DNS wire response. The server must answer 200
//! with the same content type.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsx_domain::DnsError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Media type both request and response must carry (RFC 8484 §4.2.1).
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

pub struct HttpsTransport {
    url: String,
}

impl HttpsTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DnsError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let response = tokio::time::timeout(
            timeout,
            SHARED_CLIENT
                .post(&self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .header("Content-Length", message_bytes.len())
                .body(message_bytes.to_vec())
                .send(),
        )
        .await
        .map_err(|_| DnsError::TransportTimeout {
            server: self.url.clone(),
        })?
        .map_err(|e| DnsError::TransportError(format!("DoH request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(DnsError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get("Content-Type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with(DNS_MESSAGE_CONTENT_TYPE) {
            return Err(DnsError::HttpContentType(content_type));
        }

        let response_bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DnsError::TransportTimeout {
                server: self.url.clone(),
            })?
            .map_err(|e| {
                DnsError::TransportError(format!(
                    "Failed to read DoH response from {}: {}",
                    self.url, e
                ))
            })?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_transport_creation() {
        let transport = HttpsTransport::new("https://1.1.1.1/dns-query".to_string());
        assert_eq!(transport.url, "https://1.1.1.1/dns-query");
        assert_eq!(transport.protocol_name(), "HTTPS");
    }
}
