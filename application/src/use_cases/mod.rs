//! Use cases (application services)

pub mod run_pricing;
pub mod run_quoting;
pub(crate) mod shared;
