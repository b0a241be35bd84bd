//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod carriers;
mod dispatch;
mod insurers;
mod logging;
mod output;
mod retry;

pub use carriers::{FileCarrierConfig, FileCarrierPolicyScript};
pub use dispatch::FileDispatchConfig;
pub use insurers::{FileInsurerConfig, FileInsurerPolicyConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use retry::FileRetryConfig;

use crate::carriers::CarrierScript;
use quoting_application::DispatchParams;
use quoting_domain::{ConfigIssue, ConfigIssueCode, Insurer, PolicyType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("configuration has {} error(s): {}", .0.len(), format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Scripted answers per carrier slug, then per policy type
pub type CarrierScripts = BTreeMap<String, BTreeMap<PolicyType, CarrierScript>>;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scheduler settings
    pub dispatch: FileDispatchConfig,
    /// Side-channel fetch retry budget
    pub retry: FileRetryConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Quote record logging
    pub logging: FileLoggingConfig,
    /// Agency insurer roster
    pub insurers: Vec<FileInsurerConfig>,
    /// Scripted carrier answers, keyed by carrier slug
    pub carriers: BTreeMap<String, FileCarrierConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Dispatch and retry parameters
    /// 2. Insurer roster (duplicate ids, policy type keys, tiers)
    /// 3. Tiers the scheduler can never reach
    /// 4. Scripted carrier tables
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Scheduler parameters
        issues.extend(self.dispatch.validate());
        issues.extend(self.retry.validate());

        // 2. Insurer roster
        let mut seen = HashSet::new();
        for raw in &self.insurers {
            if !seen.insert(raw.id.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateInsurer { id: raw.id.clone() },
                    format!("insurers: id '{}' is configured more than once", raw.id),
                ));
            }
            let (insurer, insurer_issues) = raw.to_insurer();
            issues.extend(insurer_issues);

            // 3. Unreachable tiers
            for (policy_type, config) in &insurer.policies {
                let tier = config.tier.level();
                if self.dispatch.tier_ceiling > 0 && tier > self.dispatch.tier_ceiling {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::TierAboveCeiling {
                            insurer: insurer.id.clone(),
                            policy_type: policy_type.to_string(),
                            tier,
                        },
                        format!(
                            "insurers.{}.policies.{}: tier {} is above dispatch.tier_ceiling ({}) and will never run",
                            insurer.id, policy_type, tier, self.dispatch.tier_ceiling
                        ),
                    ));
                }
            }
        }

        // 4. Scripted carriers
        for (slug, carrier) in &self.carriers {
            issues.extend(carrier.to_scripts(slug).1);
        }

        issues
    }

    /// Fail when any issue is an error; warnings are left to the caller.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }

    pub fn dispatch_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_tier_ceiling(self.dispatch.tier_ceiling)
            .with_retry(self.retry.to_retry_policy())
    }

    /// Domain insurers in configuration order.
    pub fn to_insurers(&self) -> Vec<Insurer> {
        self.insurers.iter().map(|raw| raw.to_insurer().0).collect()
    }

    pub fn carrier_scripts(&self) -> CarrierScripts {
        self.carriers
            .iter()
            .map(|(slug, carrier)| (slug.clone(), carrier.to_scripts(slug).0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoting_domain::{OutputFormat, Tier};

    const SAMPLE: &str = r#"
[dispatch]
tier_ceiling = 3

[retry]
max_attempts = 4
initial_backoff_ms = 100
max_backoff_ms = 800

[output]
format = "full"

[logging]
quote_log = "/tmp/quotes.jsonl"

[[insurers]]
id = "hartwell"
name = "Hartwell Mutual"

[insurers.policies.GL]
tier = 1

[insurers.policies.WC]
tier = 2

[[insurers]]
id = "ridge"
name = "Ridge Specialty"

[insurers.policies.GL]
tier = 2

[carriers.hartwell.policies.GL]
status = "quoted"
amount = 1200

[carriers.hartwell.policies.WC]
status = "declined"

[carriers.ridge.policies.GL]
status = "referred"
amount = 950
"#;

    #[test]
    fn test_deserialize_full_config() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.dispatch.tier_ceiling, 3);
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert_eq!(config.insurers.len(), 2);
        assert_eq!(config.carriers.len(), 2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_dispatch_params() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let params = config.dispatch_params();
        assert_eq!(params.tier_ceiling, 3);
        assert_eq!(params.retry.max_attempts, 4);
    }

    #[test]
    fn test_to_insurers_and_scripts() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let insurers = config.to_insurers();
        assert_eq!(insurers[0].id, "hartwell");
        assert_eq!(
            insurers[0].config_for(&PolicyType::Wc).unwrap().tier,
            Tier::new(2).unwrap()
        );

        let scripts = config.carrier_scripts();
        assert_eq!(scripts["hartwell"].len(), 2);
        assert!(scripts["ridge"].contains_key(&PolicyType::Gl));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.dispatch.tier_ceiling, 10);
        assert!(config.insurers.is_empty());
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_duplicate_insurer_is_an_error() {
        let config: FileConfig = toml::from_str(
            r#"
[[insurers]]
id = "hartwell"

[[insurers]]
id = "hartwell"
"#,
        )
        .unwrap();
        let err = config.check().unwrap_err();
        let ConfigValidationError::Invalid(errors) = err;
        assert_eq!(
            errors[0].code,
            ConfigIssueCode::DuplicateInsurer {
                id: "hartwell".to_string()
            }
        );
    }

    #[test]
    fn test_tier_above_ceiling_is_a_warning() {
        let config: FileConfig = toml::from_str(
            r#"
[dispatch]
tier_ceiling = 2

[[insurers]]
id = "far"

[insurers.policies.GL]
tier = 5
"#,
        )
        .unwrap();
        let warnings = config.check().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0].code,
            ConfigIssueCode::TierAboveCeiling { tier: 5, .. }
        ));
    }
}
