//! DNS Status Application Layer
//!
//! Ports to the outside world, the multi-nameserver query engine and one use
//! case per command.
pub mod ports;
pub mod services;
pub mod use_cases;
