pub mod forwarding;
pub mod transport;
pub mod wire_client;

pub use wire_client::WireResolverTransport;
