//! Structured configuration issues.
//!
//! Config validation never stops at the first problem; it returns every
//! detected issue with a severity so callers can decide what is fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A tier level of 0 was configured.
    InvalidTier { insurer: String, policy_type: String },
    /// A policy type key could not be parsed.
    InvalidPolicyType { value: String },
    /// A limit axis key could not be parsed.
    InvalidLimitAxis { carrier: String, value: String },
    /// A status label is not part of the canonical taxonomy.
    InvalidStatus { carrier: String, value: String },
    /// Two insurers share the same id.
    DuplicateInsurer { id: String },
    /// `retry.max_attempts` is zero.
    ZeroRetryAttempts,
    /// `retry.initial_backoff_ms` exceeds `retry.max_backoff_ms`.
    BackoffInverted,
    /// `dispatch.tier_ceiling` is zero, so nothing would ever run.
    ZeroTierCeiling,
    /// An insurer is assigned a tier above the ceiling and will never run.
    TierAboveCeiling { insurer: String, policy_type: String, tier: u32 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
