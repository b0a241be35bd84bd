//! Application-level configuration.
//!
//! - [`DispatchParams`]: tier ceiling and the retry budget handed to adapters
//! - [`RetryPolicy`]: bounded attempts with capped exponential backoff

pub mod dispatch_params;

pub use dispatch_params::{DispatchParams, RetryPolicy};
