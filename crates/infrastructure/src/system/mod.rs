pub mod nameserver;

pub use nameserver::{parse_resolv_conf, resolve_nameserver, system_nameserver};
