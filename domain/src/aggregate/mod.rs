//! Result aggregation for quoting and pricing runs.

pub mod pricing;
pub mod report;

pub use pricing::{PricingReport, PricingSummary};
pub use report::{PolicyTypeReport, QuotingReport};
