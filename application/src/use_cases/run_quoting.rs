//! Run Quoting use case
//!
//! Tiered dispatch: carriers are tried tier by tier, all tasks of a tier
//! concurrently, and a policy type leaves the search as soon as one tier
//! produced a usable result for it.

use super::shared::{AdapterCall, run_batch};
use crate::config::DispatchParams;
use crate::ports::partner_notifier::{NoPartnerNotifier, PartnerNotifier};
use crate::ports::progress::{NoProgress, QuotingProgress};
use crate::ports::quote_recorder::{NoQuoteRecorder, QuoteRecorder};
use crate::registry::AdapterRegistry;
use quoting_domain::{
    AdapterTask, ApplicationId, ApplicationStatus, CompletionTracker, DispatchMode,
    QuoteRequestContext, QuotingReport, Tier, build_task_set,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Run-level failures; everything else is a per-task status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunQuotingError {
    #[error("Application {0} has no policies to quote")]
    NoPolicies(ApplicationId),

    #[error("Application {application} is {status}, past its quotable window")]
    NotQuotable {
        application: ApplicationId,
        status: ApplicationStatus,
    },

    #[error("No eligible adapters for application {0}")]
    NoEligibleAdapters(ApplicationId),
}

/// Use case for running a tiered quoting round
pub struct RunQuotingUseCase {
    registry: Arc<AdapterRegistry>,
    params: DispatchParams,
    recorder: Arc<dyn QuoteRecorder>,
    notifier: Arc<dyn PartnerNotifier>,
}

impl RunQuotingUseCase {
    pub fn new(registry: Arc<AdapterRegistry>) -> Self {
        Self {
            registry,
            params: DispatchParams::default(),
            recorder: Arc::new(NoQuoteRecorder),
            notifier: Arc::new(NoPartnerNotifier),
        }
    }

    pub fn with_params(mut self, params: DispatchParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn QuoteRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn PartnerNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        context: &QuoteRequestContext,
    ) -> Result<QuotingReport, RunQuotingError> {
        self.execute_with_progress(context, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        context: &QuoteRequestContext,
        progress: &dyn QuotingProgress,
    ) -> Result<QuotingReport, RunQuotingError> {
        let application_id = context.application.id.clone();
        check_preconditions(context)?;

        let tasks = build_task_set(context, DispatchMode::Quote);
        if tasks.is_empty() {
            warn!("No eligible adapters for application {}", application_id);
            self.recorder
                .record_status(&application_id, ApplicationStatus::QuotingFailed);
            return Err(RunQuotingError::NoEligibleAdapters(application_id));
        }

        let policy_types = context.policy_types();
        info!(
            "Quoting application {} for {} policy types across {} tasks",
            application_id,
            policy_types.len(),
            tasks.len()
        );
        self.recorder
            .record_status(&application_id, ApplicationStatus::Quoting);

        let mut completion = CompletionTracker::new(policy_types.iter().cloned());
        let mut results = Vec::with_capacity(tasks.len());
        let mut tiers_run = 0u32;

        for level in 1..=self.params.tier_ceiling {
            if completion.all_complete() {
                break;
            }
            let Ok(tier) = Tier::new(level) else {
                continue;
            };

            let selected: Vec<AdapterTask> = tasks
                .iter()
                .filter(|t| t.tier == tier && !completion.is_complete(&t.policy_type))
                .cloned()
                .collect();

            if selected.is_empty() {
                if tiers_run > 0 {
                    debug!("Nothing left to dispatch at {}, stopping", tier);
                    break;
                }
                continue;
            }

            info!("Dispatching {} with {} tasks", tier, selected.len());
            progress.on_tier_start(tier, selected.len());

            let batch = run_batch(&self.registry, context, selected, AdapterCall::Quote, |result| {
                self.recorder.record_result(&application_id, result);
                progress.on_task_complete(result);
            })
            .await;

            let newly_completed = completion.apply_tier(tier, &batch);
            if !newly_completed.is_empty() {
                info!(
                    "{} completed: {}",
                    tier,
                    newly_completed
                        .iter()
                        .map(|pt| pt.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            progress.on_tier_complete(tier, &newly_completed);

            results.extend(batch);
            tiers_run += 1;
        }

        let skipped = tasks
            .iter()
            .filter(|t| t.tier.level() > self.params.tier_ceiling)
            .count();
        if skipped > 0 {
            debug!(
                "{} tasks sit above the tier ceiling of {} and never ran",
                skipped, self.params.tier_ceiling
            );
        }

        let report = QuotingReport::aggregate(
            application_id.clone(),
            &policy_types,
            &completion,
            results,
            tiers_run,
        );

        match report.status {
            ApplicationStatus::QuotingFailed => {
                warn!("Quoting failed for application {}", application_id)
            }
            status => info!("Application {} finished as {}", application_id, status),
        }
        self.recorder.record_status(&application_id, report.status);

        if report.notify_partner {
            self.notifier.notify(&report);
        }

        Ok(report)
    }
}

/// Shared run preconditions: at least one policy, inside the quotable window
pub(crate) fn check_preconditions(context: &QuoteRequestContext) -> Result<(), RunQuotingError> {
    let application = &context.application;
    if context.policies.is_empty() {
        return Err(RunQuotingError::NoPolicies(application.id.clone()));
    }
    if !application.status.is_quotable() {
        return Err(RunQuotingError::NotQuotable {
            application: application.id.clone(),
            status: application.status,
        });
    }
    Ok(())
}
