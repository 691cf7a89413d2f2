//! DNS Status Infrastructure Layer
//!
//! Adapters for the application ports: a wire-format DNS client speaking
//! directly to arbitrary nameservers, and the host resolver configuration.
pub mod dns;
pub mod system;
