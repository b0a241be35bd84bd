//! Progress notification port
//!
//! Defines the interface for reporting progress during a quoting run.

use quoting_domain::{PolicyType, TaskResult, Tier};

/// Callback for progress updates during quoting
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait QuotingProgress: Send + Sync {
    /// Called when a tier's batch is launched
    fn on_tier_start(&self, tier: Tier, total_tasks: usize);

    /// Called for each settled task once its tier finished
    fn on_task_complete(&self, result: &TaskResult);

    /// Called after the completion rule was applied to a tier
    fn on_tier_complete(&self, tier: Tier, newly_completed: &[PolicyType]);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuotingProgress for NoProgress {
    fn on_tier_start(&self, _tier: Tier, _total_tasks: usize) {}
    fn on_task_complete(&self, _result: &TaskResult) {}
    fn on_tier_complete(&self, _tier: Tier, _newly_completed: &[PolicyType]) {}
}
