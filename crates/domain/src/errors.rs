use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    // Option validation, surfaced before any I/O.
    #[error("No domains to query")]
    NoDomains,

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid record type: {0}")]
    InvalidType(String),

    #[error("Invalid query class: {0}")]
    InvalidClass(String),

    #[error("At most one of --udp, --tcp, --tls, --https may be given")]
    ConflictingTransports,

    #[error("--https requires a nameserver URL starting with https://")]
    HttpsRequiresUrl,

    // Wire format.
    #[error("Packet truncated before it could be parsed")]
    TruncatedPacket,

    #[error("Record type {rtype} expects {expected} RDATA octets, got {actual}")]
    InvalidLength {
        rtype: u16,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed packet: {0}")]
    InvalidFormat(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Invalid compression pointer")]
    InvalidPointer,

    #[error("Packet is not a response (QR bit clear)")]
    NotAResponse,

    #[error("Transaction id mismatch: sent {expected:#06x}, got {actual:#06x}")]
    TxIdMismatch { expected: u16, actual: u16 },

    // Transport.
    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("TLS authentication failed: {0}")]
    TlsAuthFailed(String),

    #[error("DoH server returned HTTP {0}")]
    HttpStatus(u16),

    #[error("DoH server returned unexpected content type: {0}")]
    HttpContentType(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    // Control.
    #[error("No responses were collected")]
    NoResponses,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
