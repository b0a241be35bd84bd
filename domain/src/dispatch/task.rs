//! Adapter tasks and their results.

use super::tier::Tier;
use crate::core::{policy_type::PolicyType, status::CanonicalStatus};
use crate::quote::value_objects::QuoteOutcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Registry key of an adapter: one per (carrier slug, policy type)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdapterKey {
    pub carrier: String,
    pub policy_type: PolicyType,
}

impl AdapterKey {
    pub fn new(carrier: impl Into<String>, policy_type: PolicyType) -> Self {
        Self {
            carrier: carrier.into(),
            policy_type,
        }
    }
}

impl std::fmt::Display for AdapterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.carrier, self.policy_type)
    }
}

/// Unit of work the scheduler drives: one insurer for one policy type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterTask {
    pub insurer_id: String,
    pub carrier: String,
    pub policy_type: PolicyType,
    pub tier: Tier,
}

impl AdapterTask {
    pub fn new(
        insurer_id: impl Into<String>,
        carrier: impl Into<String>,
        policy_type: PolicyType,
        tier: Tier,
    ) -> Self {
        Self {
            insurer_id: insurer_id.into(),
            carrier: carrier.into(),
            policy_type,
            tier,
        }
    }

    /// Stable identifier, unique within a run
    pub fn id(&self) -> String {
        format!("{}:{}", self.insurer_id, self.policy_type)
    }

    pub fn adapter_key(&self) -> AdapterKey {
        AdapterKey::new(self.carrier.clone(), self.policy_type.clone())
    }
}

/// Terminal result of one task, as collected by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task: AdapterTask,
    pub outcome: QuoteOutcome,
}

impl TaskResult {
    pub fn new(task: AdapterTask, outcome: QuoteOutcome) -> Self {
        Self { task, outcome }
    }

    pub fn status(&self) -> CanonicalStatus {
        self.outcome.status
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.outcome.amount
    }

    pub fn satisfies_completion(&self) -> bool {
        self.outcome.satisfies_completion()
    }
}
