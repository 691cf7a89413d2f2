#![allow(dead_code)]

pub use fixtures::{scheduler, TestDomains};
pub use test_server::{Reply, TestServer};
