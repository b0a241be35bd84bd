//! Port for recording quote results.
//!
//! Defines the [`QuoteRecorder`] trait for persisting each settled task
//! result and the application's final status. This is separate from
//! `tracing`-based operation logs: tracing handles diagnostics, while this
//! port captures the quote records downstream systems consume.

use quoting_domain::{ApplicationId, ApplicationStatus, TaskResult};
use thiserror::Error;

/// Failures of a recorder backend, surfaced when it is opened.
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("Failed to open quote log {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write quote record: {0}")]
    Write(String),
}

/// Port for persisting quote records.
///
/// Recording is synchronous and non-fallible from the scheduler's point of
/// view: a recorder failure is the recorder's to log, never a reason to
/// fail the run.
pub trait QuoteRecorder: Send + Sync {
    /// Record one settled task result.
    fn record_result(&self, application: &ApplicationId, result: &TaskResult);

    /// Record an application status transition.
    fn record_status(&self, application: &ApplicationId, status: ApplicationStatus);
}

/// No-op implementation for tests and when recording is disabled.
pub struct NoQuoteRecorder;

impl QuoteRecorder for NoQuoteRecorder {
    fn record_result(&self, _application: &ApplicationId, _result: &TaskResult) {}
    fn record_status(&self, _application: &ApplicationId, _status: ApplicationStatus) {}
}
