pub mod nameserver_source;
pub mod resolver_transport;

pub use nameserver_source::NameserverSource;
pub use resolver_transport::ResolverTransport;
