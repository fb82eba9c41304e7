pub mod config;
pub mod errors;
pub mod flags;
pub mod name;
pub mod options;
pub mod protocol;
pub mod qclass;
pub mod question;
pub mod rdata;
pub mod record_type;
pub mod response;

pub use config::{ClientConfig, OutputConfig};
pub use errors::DnsError;
pub use flags::{rcode_name, Flags};
pub use name::validate_domain;
pub use options::{ClientOptions, ColorMode, EdnsMode, ProtocolTweaks};
pub use protocol::{DnsProtocol, TransportKind, DNS_PORT, DOT_PORT};
pub use qclass::{class_name, QClass};
pub use question::DnsQuery;
pub use rdata::RData;
pub use record_type::{type_name, RecordType};
pub use response::{DnsRecord, DnsResponse};
