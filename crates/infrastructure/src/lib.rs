pub mod system;
pub mod transport;
pub mod wire;

pub use transport::TransportDispatcher;
pub use wire::WireCodec;
