//! Quoting run aggregation.
//!
//! [`QuotingReport::aggregate`] is pure: it takes the settled task results
//! and the completion state and decides usability per policy type, the
//! partner-notify flag and the final application status.

use crate::core::{lifecycle::ApplicationStatus, policy_type::PolicyType, status::CanonicalStatus};
use crate::dispatch::{
    completion::CompletionTracker,
    task::TaskResult,
    tier::Tier,
};
use crate::quote::entities::ApplicationId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-policy-type view of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTypeReport {
    pub policy_type: PolicyType,
    /// A usable result was produced
    pub satisfied: bool,
    pub tier_reached: Option<Tier>,
    pub attempted: usize,
    /// Best result: highest status, then lowest premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<TaskResult>,
}

/// Complete result of a quoting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotingReport {
    pub application_id: ApplicationId,
    pub status: ApplicationStatus,
    pub policy_types: Vec<PolicyTypeReport>,
    pub results: Vec<TaskResult>,
    pub notify_partner: bool,
    pub tiers_run: u32,
}

impl QuotingReport {
    /// Aggregate settled results into a report.
    ///
    /// Status is `Quoted` when any policy type is satisfied. Otherwise it is
    /// `QuotingFailed` when some task ended in `error`, and `QuotedNoOffers`
    /// when every carrier answered but none usably.
    pub fn aggregate(
        application_id: ApplicationId,
        policy_types: &[PolicyType],
        completion: &CompletionTracker,
        results: Vec<TaskResult>,
        tiers_run: u32,
    ) -> Self {
        let policy_reports = policy_types
            .iter()
            .map(|policy_type| {
                let for_type: Vec<&TaskResult> = results
                    .iter()
                    .filter(|r| &r.task.policy_type == policy_type)
                    .collect();
                let state = completion.get(policy_type).copied().unwrap_or_default();
                PolicyTypeReport {
                    policy_type: policy_type.clone(),
                    satisfied: state.satisfied,
                    tier_reached: state.tier_reached,
                    attempted: for_type.len(),
                    best: for_type.into_iter().max_by(|a, b| rank(a, b)).cloned(),
                }
            })
            .collect::<Vec<_>>();

        let notify_partner = results.iter().any(|r| r.outcome.notify_partner);

        let status = if policy_reports.iter().any(|p| p.satisfied) {
            ApplicationStatus::Quoted
        } else if results.iter().any(|r| r.status() == CanonicalStatus::Error) {
            ApplicationStatus::QuotingFailed
        } else {
            ApplicationStatus::QuotedNoOffers
        };

        Self {
            application_id,
            status,
            policy_types: policy_reports,
            results,
            notify_partner,
            tiers_run,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == ApplicationStatus::QuotingFailed
    }

    pub fn usable_results(&self) -> impl Iterator<Item = &TaskResult> {
        self.results.iter().filter(|r| r.satisfies_completion())
    }
}

/// Usable results win, then higher status, then the cheaper priced result.
fn rank(a: &TaskResult, b: &TaskResult) -> Ordering {
    a.satisfies_completion()
        .cmp(&b.satisfies_completion())
        .then_with(|| a.status().cmp(&b.status()))
        .then_with(|| match (a.amount(), b.amount()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        })
}
