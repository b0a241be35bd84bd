//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Tier levels start at 1, got {0}")]
    InvalidTier(u32),

    #[error("Unknown canonical status: {0}")]
    UnknownStatus(String),

    #[error("Unknown application status: {0}")]
    UnknownApplicationStatus(String),

    #[error("Unknown limit axis: {0}")]
    UnknownLimitAxis(String),

    #[error("Invalid policy type: {0}")]
    InvalidPolicyType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tier_display() {
        let error = DomainError::InvalidTier(0);
        assert_eq!(error.to_string(), "Tier levels start at 1, got 0");
    }

    #[test]
    fn test_unknown_status_display() {
        let error = DomainError::UnknownStatus("maybe".to_string());
        assert_eq!(error.to_string(), "Unknown canonical status: maybe");
    }
}
