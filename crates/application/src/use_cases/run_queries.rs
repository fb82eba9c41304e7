use crate::ports::{DnsExchanger, EncodeOptions, MessageCodec};
use dnsx_domain::{ClientOptions, DnsError, DnsQuery, DnsResponse, TransportKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// One accepted response, paired with the query that produced it.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub query: DnsQuery,
    pub response: DnsResponse,
    pub server: String,
    pub protocol: &'static str,
    pub elapsed: Duration,
}

/// Drives the full workflow for one `run()`: expand the query plan, encode,
/// exchange with retries and truncation fallback, decode, collect.
pub struct RunQueriesUseCase {
    codec: Arc<dyn MessageCodec>,
    exchanger: Arc<dyn DnsExchanger>,
    options: ClientOptions,
}

impl RunQueriesUseCase {
    pub fn new(
        codec: Arc<dyn MessageCodec>,
        exchanger: Arc<dyn DnsExchanger>,
        options: ClientOptions,
    ) -> Self {
        Self {
            codec,
            exchanger,
            options,
        }
    }

    pub async fn execute(&self) -> Result<Vec<QueryOutcome>, DnsError> {
        self.options.validate()?;

        let plan = self.options.query_plan();
        let kind = self.options.transport_kind();
        let timeout = Duration::from_millis(self.options.timeout_ms);
        let attempts = self.options.attempts();

        debug!(
            queries = plan.len(),
            transport = %kind,
            server = %self.exchanger.server_name(),
            attempts = attempts,
            "Query plan expanded"
        );

        let mut outcomes = Vec::with_capacity(plan.len());
        for query in plan {
            let outcome = self.run_one(&query, kind, timeout, attempts).await?;
            outcomes.push(outcome);
        }

        if outcomes.is_empty() {
            return Err(DnsError::NoResponses);
        }
        Ok(outcomes)
    }

    async fn run_one(
        &self,
        query: &DnsQuery,
        kind: TransportKind,
        timeout: Duration,
        attempts: u32,
    ) -> Result<QueryOutcome, DnsError> {
        let encode_options = EncodeOptions {
            txid: self.options.txid,
            recursion_desired: true,
            tweaks: self.options.tweaks,
            edns: self.options.edns,
        };
        let (txid, request) = self.codec.encode_query(query, &encode_options)?;

        let mut last_error = DnsError::NoResponses;
        for attempt in 0..attempts {
            if attempt > 0 {
                let backoff = backoff_delay(attempt - 1);
                debug!(
                    domain = %query.domain,
                    attempt = attempt + 1,
                    backoff_ms = backoff.as_millis() as u64,
                    "Retrying after backoff"
                );
                tokio::time::sleep(backoff).await;
            }

            match self.attempt(&request, txid, kind, timeout).await {
                Ok((response, protocol, elapsed)) => {
                    return Ok(QueryOutcome {
                        query: query.clone(),
                        response,
                        server: self.exchanger.server_name(),
                        protocol,
                        elapsed,
                    });
                }
                Err(error) => {
                    warn!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        attempt = attempt + 1,
                        error = %error,
                        "Query attempt failed"
                    );
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    /// One attempt: exchange, decode, verify the transaction id, and fall
    /// back to TCP when a UDP response comes back truncated.
    async fn attempt(
        &self,
        request: &[u8],
        txid: u16,
        kind: TransportKind,
        timeout: Duration,
    ) -> Result<(DnsResponse, &'static str, Duration), DnsError> {
        let start = Instant::now();

        let reply = self.exchanger.exchange(kind, request, timeout).await?;
        let response = self.decode_checked(&reply, txid)?;

        if kind == TransportKind::Udp && response.is_truncated() {
            debug!(
                server = %self.exchanger.server_name(),
                "Response truncated (TC bit), retrying via TCP"
            );
            // The identical request bytes go out again; the id is not
            // re-randomised, so the same txid check applies.
            let reply = self
                .exchanger
                .exchange(TransportKind::Tcp, request, timeout)
                .await?;
            let response = self.decode_checked(&reply, txid)?;
            return Ok((response, TransportKind::Tcp.name(), start.elapsed()));
        }

        Ok((response, kind.name(), start.elapsed()))
    }

    fn decode_checked(&self, reply: &[u8], txid: u16) -> Result<DnsResponse, DnsError> {
        let response = self.codec.decode_response(reply)?;
        if response.id != txid {
            return Err(DnsError::TxIdMismatch {
                expected: txid,
                actual: response.id,
            });
        }
        Ok(response)
    }
}

/// Exponential backoff before attempts 2..k: 1 s, 2 s, 4 s, …
fn backoff_delay(failed_attempts: u32) -> Duration {
    Duration::from_millis(1000u64 << failed_attempts.min(16))
}
