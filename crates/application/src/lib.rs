pub mod ports;
pub mod use_cases;

pub use ports::{DnsExchanger, EncodeOptions, MessageCodec};
pub use use_cases::{QueryOutcome, RunQueriesUseCase};

// Re-export for convenience
pub use dnsx_domain::DnsQuery;
