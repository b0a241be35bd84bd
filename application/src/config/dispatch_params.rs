//! Dispatch parameters: scheduler loop and retry control.
//!
//! [`DispatchParams`] groups the static parameters of
//! [`RunQuotingUseCase`](crate::use_cases::run_quoting::RunQuotingUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded retry budget for side-channel fetches.
///
/// `max_attempts` counts total attempts, including the first. Between
/// attempts the delay doubles from `initial_backoff` up to `max_backoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Retry without waiting between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Delay before the attempt following `failed_attempt` (1-based).
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(16);
        self.initial_backoff
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }
}

/// Scheduler loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Highest tier the scheduler will enter.
    pub tier_ceiling: u32,
    /// Retry budget handed to adapters for side-channel fetches.
    pub retry: RetryPolicy,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            tier_ceiling: 10,
            retry: RetryPolicy::default(),
        }
    }
}

impl DispatchParams {
    // ==================== Builder Methods ====================

    pub fn with_tier_ceiling(mut self, ceiling: u32) -> Self {
        self.tier_ceiling = ceiling;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
