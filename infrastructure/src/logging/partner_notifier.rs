//! Partner notification through the operation log.

use quoting_application::PartnerNotifier;
use quoting_domain::QuotingReport;
use tracing::info;

/// Emits one structured `tracing` event per notification.
///
/// Delivery to the agency partner (email, webhook) is downstream of the log
/// pipeline; this crate only guarantees the event is emitted once per run.
#[derive(Debug, Default)]
pub struct LogPartnerNotifier;

impl PartnerNotifier for LogPartnerNotifier {
    fn notify(&self, report: &QuotingReport) {
        let flagged: Vec<String> = report
            .results
            .iter()
            .filter(|r| r.outcome.notify_partner)
            .map(|r| r.task.id())
            .collect();
        info!(
            target: "partner_notification",
            application = %report.application_id,
            status = %report.status,
            tasks = %flagged.join(","),
            "Partner notification requested"
        );
    }
}
