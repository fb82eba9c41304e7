pub mod decoder;
pub mod encoder;

use dnsx_application::{EncodeOptions, MessageCodec};
use dnsx_domain::{DnsError, DnsQuery, DnsResponse};

pub use decoder::decode_response;
pub use encoder::encode_query;

/// The RFC 1035 codec behind the application's `MessageCodec` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireCodec;

impl WireCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for WireCodec {
    fn encode_query(
        &self,
        query: &DnsQuery,
        options: &EncodeOptions,
    ) -> Result<(u16, Vec<u8>), DnsError> {
        encoder::encode_query(query, options)
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DnsError> {
        decoder::decode_response(bytes)
    }
}
