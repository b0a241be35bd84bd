//! Dispatch configuration from TOML (`[dispatch]` section)

use quoting_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw dispatch configuration from TOML
///
/// # Example
///
/// ```toml
/// [dispatch]
/// tier_ceiling = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Highest tier the scheduler enters
    pub tier_ceiling: u32,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self { tier_ceiling: 10 }
    }
}

impl FileDispatchConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.tier_ceiling == 0 {
            return vec![ConfigIssue::error(
                ConfigIssueCode::ZeroTierCeiling,
                "dispatch.tier_ceiling: must be at least 1, no tier would ever run",
            )];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ceiling_is_an_error() {
        let config = FileDispatchConfig { tier_ceiling: 0 };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroTierCeiling);
    }

    #[test]
    fn test_default_ceiling_is_valid() {
        assert!(FileDispatchConfig::default().validate().is_empty());
    }
}
