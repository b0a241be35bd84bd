//! Retry configuration from TOML (`[retry]` section)

use quoting_application::RetryPolicy;
use quoting_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry configuration from TOML
///
/// # Example
///
/// ```toml
/// [retry]
/// max_attempts = 5          # total attempts, including the first
/// initial_backoff_ms = 200
/// max_backoff_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 200,
            max_backoff_ms: 2000,
        }
    }
}

impl FileRetryConfig {
    /// Convert to the application retry policy, clamping invalid values.
    pub fn to_retry_policy(&self) -> RetryPolicy {
        let initial = Duration::from_millis(self.initial_backoff_ms);
        let max = Duration::from_millis(self.max_backoff_ms.max(self.initial_backoff_ms));
        RetryPolicy::default()
            .with_max_attempts(self.max_attempts.max(1))
            .with_backoff(initial, max)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_attempts == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroRetryAttempts,
                "retry.max_attempts: 0 is treated as a single attempt",
            ));
        }
        if self.initial_backoff_ms > self.max_backoff_ms {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BackoffInverted,
                format!(
                    "retry.initial_backoff_ms ({}) exceeds retry.max_backoff_ms ({}), using {} for both",
                    self.initial_backoff_ms, self.max_backoff_ms, self.initial_backoff_ms
                ),
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_retry_policy() {
        let policy = FileRetryConfig::default().to_retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.initial_backoff, Duration::from_millis(200));
        assert_eq!(policy.max_backoff, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_values_are_clamped_and_reported() {
        let config = FileRetryConfig {
            max_attempts: 0,
            initial_backoff_ms: 500,
            max_backoff_ms: 100,
        };
        let policy = config.to_retry_policy();
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.max_backoff, Duration::from_millis(500));

        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![ConfigIssueCode::ZeroRetryAttempts, ConfigIssueCode::BackoffInverted]
        );
    }
}
