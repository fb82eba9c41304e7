use async_trait::async_trait;
use dnsx_domain::{DnsError, TransportKind};
use std::time::Duration;

/// One request→reply RPC against the configured nameserver.
///
/// Implementations own their sockets for the duration of a single call and
/// release them on every exit path.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        kind: TransportKind,
        request: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DnsError>;

    /// Human-readable nameserver endpoint, for logs and the renderer.
    fn server_name(&self) -> String;
}
