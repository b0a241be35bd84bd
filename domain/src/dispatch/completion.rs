//! Per-policy-type completion tracking.

use super::task::TaskResult;
use super::tier::Tier;
use crate::core::policy_type::PolicyType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion state of one policy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyTypeCompletion {
    pub satisfied: bool,
    /// Highest tier that ran for this policy type
    pub tier_reached: Option<Tier>,
}

/// Tracks which policy types already have a good-enough result.
///
/// A flag only ever flips from false to true.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    entries: BTreeMap<PolicyType, PolicyTypeCompletion>,
}

impl CompletionTracker {
    pub fn new(policy_types: impl IntoIterator<Item = PolicyType>) -> Self {
        Self {
            entries: policy_types
                .into_iter()
                .map(|pt| (pt, PolicyTypeCompletion::default()))
                .collect(),
        }
    }

    pub fn is_complete(&self, policy_type: &PolicyType) -> bool {
        self.entries.get(policy_type).is_some_and(|c| c.satisfied)
    }

    pub fn all_complete(&self) -> bool {
        self.entries.values().all(|c| c.satisfied)
    }

    pub fn any_complete(&self) -> bool {
        self.entries.values().any(|c| c.satisfied)
    }

    pub fn get(&self, policy_type: &PolicyType) -> Option<&PolicyTypeCompletion> {
        self.entries.get(policy_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PolicyType, &PolicyTypeCompletion)> {
        self.entries.iter()
    }

    /// Apply the results of one settled tier.
    ///
    /// Returns the policy types that became complete in this tier.
    pub fn apply_tier(&mut self, tier: Tier, results: &[TaskResult]) -> Vec<PolicyType> {
        let mut newly_completed = Vec::new();
        for result in results {
            let entry = self
                .entries
                .entry(result.task.policy_type.clone())
                .or_default();
            entry.tier_reached = Some(entry.tier_reached.map_or(tier, |t| t.max(tier)));
            if !entry.satisfied && result.satisfies_completion() {
                entry.satisfied = true;
                newly_completed.push(result.task.policy_type.clone());
            }
        }
        newly_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::task::AdapterTask;
    use crate::quote::value_objects::QuoteOutcome;
    use rust_decimal::Decimal;

    fn result(policy_type: PolicyType, tier: Tier, outcome: QuoteOutcome) -> TaskResult {
        TaskResult::new(AdapterTask::new("ins", "ins", policy_type, tier), outcome)
    }

    #[test]
    fn test_quoted_completes_policy_type() {
        let mut tracker = CompletionTracker::new([PolicyType::Bop, PolicyType::Wc]);
        let done = tracker.apply_tier(
            Tier::FIRST,
            &[result(PolicyType::Bop, Tier::FIRST, QuoteOutcome::quoted(Decimal::from(800)))],
        );
        assert_eq!(done, vec![PolicyType::Bop]);
        assert!(tracker.is_complete(&PolicyType::Bop));
        assert!(!tracker.is_complete(&PolicyType::Wc));
        assert!(!tracker.all_complete());
    }

    #[test]
    fn test_zero_priced_referral_does_not_complete() {
        let mut tracker = CompletionTracker::new([PolicyType::Gl]);
        tracker.apply_tier(
            Tier::FIRST,
            &[result(PolicyType::Gl, Tier::FIRST, QuoteOutcome::referred(Some(Decimal::ZERO)))],
        );
        assert!(!tracker.is_complete(&PolicyType::Gl));
        assert_eq!(tracker.get(&PolicyType::Gl).unwrap().tier_reached, Some(Tier::FIRST));
    }

    #[test]
    fn test_completion_never_reverts() {
        let mut tracker = CompletionTracker::new([PolicyType::Gl]);
        let second = Tier::FIRST.next();
        tracker.apply_tier(
            Tier::FIRST,
            &[result(PolicyType::Gl, Tier::FIRST, QuoteOutcome::referred(Some(Decimal::from(120_000))))],
        );
        let done = tracker.apply_tier(
            second,
            &[result(PolicyType::Gl, second, QuoteOutcome::error("late failure"))],
        );
        assert!(done.is_empty());
        assert!(tracker.is_complete(&PolicyType::Gl));
        assert_eq!(tracker.get(&PolicyType::Gl).unwrap().tier_reached, Some(second));
    }
}
