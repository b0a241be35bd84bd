//! Quote request loading
//!
//! Reads a [`QuoteRequestContext`](quoting_domain::QuoteRequestContext) from
//! a JSON request file, filling the insurer roster from configuration when
//! the request does not carry its own.

mod loader;

pub use loader::{ContextLoadError, QuoteRequestFile, load_request};
