//! In-memory quote recorder.

use quoting_application::QuoteRecorder;
use quoting_domain::{ApplicationId, ApplicationStatus, TaskResult};
use std::sync::Mutex;

/// Keeps every record in memory, in arrival order, for inspection after a run.
#[derive(Debug, Default)]
pub struct InMemoryQuoteRecorder {
    results: Mutex<Vec<(ApplicationId, TaskResult)>>,
    statuses: Mutex<Vec<(ApplicationId, ApplicationStatus)>>,
}

impl InMemoryQuoteRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<(ApplicationId, TaskResult)> {
        self.results.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn statuses(&self) -> Vec<(ApplicationId, ApplicationStatus)> {
        self.statuses.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The last status recorded for an application
    pub fn current_status(&self, application: &ApplicationId) -> Option<ApplicationStatus> {
        self.statuses()
            .into_iter()
            .rev()
            .find(|(id, _)| id == application)
            .map(|(_, status)| status)
    }
}

impl QuoteRecorder for InMemoryQuoteRecorder {
    fn record_result(&self, application: &ApplicationId, result: &TaskResult) {
        if let Ok(mut results) = self.results.lock() {
            results.push((application.clone(), result.clone()));
        }
    }

    fn record_status(&self, application: &ApplicationId, status: ApplicationStatus) {
        if let Ok(mut statuses) = self.statuses.lock() {
            statuses.push((application.clone(), status));
        }
    }
}
