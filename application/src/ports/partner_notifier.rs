//! Port for notifying the agency partner about a finished run.

use quoting_domain::QuotingReport;

/// Delivery of partner notifications is an external concern; the scheduler
/// only decides *whether* to notify.
pub trait PartnerNotifier: Send + Sync {
    fn notify(&self, report: &QuotingReport);
}

/// No-op implementation for tests and when notifications are disabled.
pub struct NoPartnerNotifier;

impl PartnerNotifier for NoPartnerNotifier {
    fn notify(&self, _report: &QuotingReport) {}
}
