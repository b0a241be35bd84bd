//! Insurer configuration from TOML (`[[insurers]]` array)

use quoting_domain::{
    Capabilities, ConfigIssue, ConfigIssueCode, Insurer, InsurerPolicyConfig, PolicyType, Tier,
    Transport,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw insurer entry from TOML
///
/// # Example
///
/// ```toml
/// [[insurers]]
/// id = "hartwell"
/// name = "Hartwell Mutual"
/// slug = "hartwell"              # defaults to id
///
/// [insurers.policies.GL]
/// tier = 1
/// transport = "api"              # "api" or "manual"
/// pricing_only = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInsurerConfig {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    /// Per policy type configuration, keyed by policy type code
    pub policies: BTreeMap<String, FileInsurerPolicyConfig>,
}

/// Raw (insurer, policy type) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInsurerPolicyConfig {
    pub enabled: bool,
    pub transport: Transport,
    pub tier: u32,
    pub api_support: bool,
    pub pricing_only: bool,
    pub bind_support: bool,
}

impl Default for FileInsurerPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transport: Transport::Api,
            tier: 1,
            api_support: true,
            pricing_only: false,
            bind_support: false,
        }
    }
}

impl FileInsurerConfig {
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }

    /// Convert to the domain insurer, returning issues for entries that had
    /// to be skipped or repaired.
    pub fn to_insurer(&self) -> (Insurer, Vec<ConfigIssue>) {
        let name = if self.name.is_empty() { &self.id } else { &self.name };
        let mut insurer = Insurer::new(self.id.clone(), name.clone(), self.slug());
        let mut issues = Vec::new();

        for (key, raw) in &self.policies {
            let Ok(policy_type) = key.parse::<PolicyType>() else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidPolicyType { value: key.clone() },
                    format!("insurers.{}.policies: invalid policy type '{}'", self.id, key),
                ));
                continue;
            };

            let tier = match Tier::new(raw.tier) {
                Ok(tier) => tier,
                Err(_) => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::InvalidTier {
                            insurer: self.id.clone(),
                            policy_type: policy_type.to_string(),
                        },
                        format!(
                            "insurers.{}.policies.{}.tier: tiers start at 1, using 1",
                            self.id, policy_type
                        ),
                    ));
                    Tier::FIRST
                }
            };

            let mut config = InsurerPolicyConfig::default()
                .with_tier(tier)
                .with_transport(raw.transport)
                .with_capabilities(Capabilities {
                    api_support: raw.api_support,
                    pricing_only: raw.pricing_only,
                    bind_support: raw.bind_support,
                });
            if !raw.enabled {
                config = config.disabled();
            }
            insurer = insurer.supporting(policy_type, config);
        }

        (insurer, issues)
    }
}
