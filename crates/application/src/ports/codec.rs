use dnsx_domain::{DnsError, DnsQuery, DnsResponse, EdnsMode, ProtocolTweaks};

/// Knobs for building one query message.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Pinned transaction id; a random one is drawn when absent.
    pub txid: Option<u16>,
    pub recursion_desired: bool,
    pub tweaks: ProtocolTweaks,
    pub edns: EdnsMode,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self {
            recursion_desired: true,
            ..Self::default()
        }
    }
}

/// Wire-format codec boundary. Encoding returns the transaction id next to
/// the bytes so the caller can match it against the response.
pub trait MessageCodec: Send + Sync {
    fn encode_query(
        &self,
        query: &DnsQuery,
        options: &EncodeOptions,
    ) -> Result<(u16, Vec<u8>), DnsError>;

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DnsError>;
}
