//! Scripted carrier configuration from TOML (`[carriers.<slug>]` tables)
//!
//! Each table describes how the scripted carrier adapter answers for one
//! carrier slug, per policy type. Dry runs and demos use these instead of
//! live carrier integrations.

use crate::carriers::CarrierScript;
use quoting_domain::{
    CanonicalStatus, ConfigIssue, ConfigIssueCode, LimitAxis, PolicyType, SupportedLimits,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Raw carrier entry from TOML
///
/// # Example
///
/// ```toml
/// [carriers.hartwell]
/// latency_ms = 40
///
/// [carriers.hartwell.policies.GL]
/// status = "quoted"
/// amount = "1250.00"
/// deductibles = [500, 1000, 2500]
/// document_url = "https://docs.hartwell.example/letters/{application}"
///
/// [carriers.hartwell.policies.GL.limits]
/// per_occurrence = [1000000, 2000000]
/// aggregate = [2000000, 4000000]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCarrierConfig {
    /// Simulated response time of every call
    pub latency_ms: u64,
    pub policies: BTreeMap<String, FileCarrierPolicyScript>,
}

/// Scripted answer for one (carrier, policy type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCarrierPolicyScript {
    /// Carrier status label, normalized with the lenient label mapping
    pub status: String,
    pub amount: Option<Decimal>,
    /// Indicative price returned by `price`; falls back to `amount`
    pub indication: Option<Decimal>,
    pub decline_reasons: Vec<String>,
    /// Simulated infrastructure failure message
    pub fail: Option<String>,
    pub notify_partner: bool,
    /// Quote letter location; `{application}` is replaced by the application id
    pub document_url: Option<String>,
    pub limits: BTreeMap<String, Vec<u64>>,
    pub deductibles: Vec<u64>,
}

impl Default for FileCarrierPolicyScript {
    fn default() -> Self {
        Self {
            status: "quoted".to_string(),
            amount: None,
            indication: None,
            decline_reasons: Vec::new(),
            fail: None,
            notify_partner: false,
            document_url: None,
            limits: BTreeMap::new(),
            deductibles: Vec::new(),
        }
    }
}

impl FileCarrierConfig {
    /// Convert every policy script, skipping keys that do not parse.
    pub fn to_scripts(&self, slug: &str) -> (BTreeMap<PolicyType, CarrierScript>, Vec<ConfigIssue>) {
        let mut scripts = BTreeMap::new();
        let mut issues = Vec::new();

        for (key, raw) in &self.policies {
            let Ok(policy_type) = key.parse::<PolicyType>() else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidPolicyType { value: key.clone() },
                    format!("carriers.{}.policies: invalid policy type '{}'", slug, key),
                ));
                continue;
            };
            let (script, script_issues) = raw.to_script(slug, self.latency_ms);
            issues.extend(script_issues);
            scripts.insert(policy_type, script);
        }

        (scripts, issues)
    }
}

impl FileCarrierPolicyScript {
    pub fn to_script(&self, slug: &str, latency_ms: u64) -> (CarrierScript, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let status = CanonicalStatus::from_carrier_label(&self.status);
        if status == CanonicalStatus::Error && !self.status.trim().eq_ignore_ascii_case("error") {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidStatus {
                    carrier: slug.to_string(),
                    value: self.status.clone(),
                },
                format!(
                    "carriers.{}: unknown status '{}', answers will be 'error'",
                    slug, self.status
                ),
            ));
        }

        let mut supported = SupportedLimits::default().with_deductibles(self.deductibles.clone());
        for (key, values) in &self.limits {
            match key.parse::<LimitAxis>() {
                Ok(axis) => supported = supported.with_axis(axis, values.clone()),
                Err(_) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidLimitAxis {
                        carrier: slug.to_string(),
                        value: key.clone(),
                    },
                    format!("carriers.{}.limits: unknown limit axis '{}'", slug, key),
                )),
            }
        }

        let script = CarrierScript {
            status,
            amount: self.amount,
            indication: self.indication,
            decline_reasons: self.decline_reasons.clone(),
            failure: self.fail.clone(),
            notify_partner: self.notify_partner,
            document_url: self.document_url.clone(),
            supported,
            latency: Duration::from_millis(latency_ms),
        };
        (script, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> BTreeMap<String, FileCarrierConfig> {
        #[derive(Deserialize)]
        struct Wrapper {
            carriers: BTreeMap<String, FileCarrierConfig>,
        }
        toml::from_str::<Wrapper>(toml_str).unwrap().carriers
    }

    #[test]
    fn test_to_scripts() {
        let carriers = parse(
            r#"
[carriers.hartwell]
latency_ms = 25

[carriers.hartwell.policies.GL]
status = "Bound"
amount = "1250.50"
deductibles = [2500, 500, 1000]

[carriers.hartwell.policies.GL.limits]
per_occurrence = [2000000, 1000000]

[carriers.hartwell.policies.WC]
status = "out of appetite"
decline_reasons = ["roofing class"]
"#,
        );
        let (scripts, issues) = carriers["hartwell"].to_scripts("hartwell");
        assert!(issues.is_empty());

        let gl = &scripts[&PolicyType::Gl];
        assert_eq!(gl.status, CanonicalStatus::Quoted);
        assert_eq!(gl.amount, Some(Decimal::new(125050, 2)));
        assert_eq!(gl.latency, Duration::from_millis(25));
        assert_eq!(gl.supported.deductibles, vec![500, 1000, 2500]);
        assert_eq!(
            gl.supported.axes[&LimitAxis::PerOccurrence],
            vec![1_000_000, 2_000_000]
        );

        let wc = &scripts[&PolicyType::Wc];
        assert_eq!(wc.status, CanonicalStatus::Autodeclined);
        assert_eq!(wc.decline_reasons, vec!["roofing class"]);
    }

    #[test]
    fn test_unknown_labels_are_reported() {
        let carriers = parse(
            r#"
[carriers.ridge.policies.BOP]
status = "maybe later"

[carriers.ridge.policies.BOP.limits]
per_claim = [100]
"#,
        );
        let (scripts, issues) = carriers["ridge"].to_scripts("ridge");
        assert_eq!(scripts[&PolicyType::Bop].status, CanonicalStatus::Error);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidStatus { .. }));
        assert!(matches!(issues[1].code, ConfigIssueCode::InvalidLimitAxis { .. }));
    }

    #[test]
    fn test_explicit_error_status_is_not_reported() {
        let raw = FileCarrierPolicyScript {
            status: "error".to_string(),
            ..FileCarrierPolicyScript::default()
        };
        let (_, issues) = raw.to_script("ridge", 0);
        assert!(issues.is_empty());
    }
}
