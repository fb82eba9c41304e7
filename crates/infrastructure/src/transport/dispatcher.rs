use super::create_transport;
use async_trait::async_trait;
use dnsx_application::DnsExchanger;
use dnsx_domain::{DnsError, DnsProtocol, TransportKind};
use std::time::Duration;

/// Routes request→reply exchanges to the transport the orchestrator picked.
///
/// Each exchange owns its socket for exactly one call; nothing is pooled
/// or reused between calls.
pub struct TransportDispatcher {
    protocol: DnsProtocol,
}

impl TransportDispatcher {
    pub fn new(protocol: DnsProtocol) -> Self {
        Self { protocol }
    }

    pub fn protocol(&self) -> &DnsProtocol {
        &self.protocol
    }
}

#[async_trait]
impl DnsExchanger for TransportDispatcher {
    async fn exchange(
        &self,
        kind: TransportKind,
        request: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DnsError> {
        let transport = create_transport(kind, &self.protocol)?;
        let response = transport.send(request, timeout).await?;
        Ok(response.bytes)
    }

    fn server_name(&self) -> String {
        self.protocol.to_string()
    }
}
