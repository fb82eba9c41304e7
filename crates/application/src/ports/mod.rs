mod codec;
mod exchanger;

pub use codec::{EncodeOptions, MessageCodec};
pub use exchanger::DnsExchanger;
