pub mod aggregator;
pub mod fan_out;
pub mod report_formatter;
pub mod resolver_client;

pub use aggregator::ResultAggregator;
pub use fan_out::{FanOutOptions, FanOutScheduler, DEFAULT_ATTEMPT_TIMEOUT};
pub use report_formatter::ReportFormatter;
pub use resolver_client::{Attempt, ResolverClient};
