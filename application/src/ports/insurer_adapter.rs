//! Insurer adapter port
//!
//! Defines the interface every carrier integration implements. One adapter
//! exists per (carrier, policy type); implementations live in the
//! infrastructure layer and own the carrier's wire format.

use async_trait::async_trait;
use quoting_domain::{AdapterTask, QuoteOutcome, QuoteRequestContext};
use std::sync::Arc;
use thiserror::Error;

/// Infrastructure failures of an adapter call.
///
/// Carrier-side declines, referrals and outages are *not* errors: adapters
/// return them as [`QuoteOutcome`] statuses. Only a failure to obtain an
/// answer at all ends up here.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed carrier response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Missing request data: {0}")]
    MissingData(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Uniform async contract of a carrier integration
#[async_trait]
pub trait InsurerAdapter: Send + Sync {
    /// Request a bindable quote for the task's policy.
    async fn quote(
        &self,
        task: &AdapterTask,
        context: &QuoteRequestContext,
    ) -> Result<QuoteOutcome, AdapterError>;

    /// Request an indicative price for the task's policy.
    ///
    /// Defaults to [`InsurerAdapter::quote`] for carriers without a separate
    /// indication endpoint.
    async fn price(
        &self,
        task: &AdapterTask,
        context: &QuoteRequestContext,
    ) -> Result<QuoteOutcome, AdapterError> {
        self.quote(task, context).await
    }
}

/// Produces a fresh adapter for each task; adapters are never reused.
pub type AdapterFactory = Arc<dyn Fn() -> Box<dyn InsurerAdapter> + Send + Sync>;
