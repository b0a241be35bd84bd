//! Quote request entities.
//!
//! A [`QuoteRequestContext`] is the immutable snapshot one quoting run works
//! from: the application, the policies it asks for, and the agency's
//! candidate insurers with their per-policy-type configuration.

use crate::core::{lifecycle::ApplicationStatus, policy_type::PolicyType};
use crate::dispatch::tier::Tier;
use crate::limits::Limits;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Application identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The business applying for coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub business_name: String,
    pub agency_id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

impl Application {
    pub fn new(
        id: impl Into<String>,
        business_name: impl Into<String>,
        agency_id: impl Into<String>,
    ) -> Self {
        Self {
            id: ApplicationId::new(id),
            business_name: business_name.into(),
            agency_id: agency_id.into(),
            status: ApplicationStatus::QuestionsDone,
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }
}

/// A prior loss reported on the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

/// One requested coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_type: PolicyType,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub deductible: Option<u64>,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl Policy {
    pub fn new(policy_type: PolicyType, effective_date: NaiveDate) -> Self {
        Self {
            policy_type,
            limits: Limits::new(),
            deductible: None,
            effective_date,
            claims: Vec::new(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_deductible(mut self, deductible: u64) -> Self {
        self.deductible = Some(deductible);
        self
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }
}

/// How the agency reaches a carrier for one policy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Automated through the carrier's adapter
    #[default]
    Api,
    /// Handled by people through the carrier portal; never dispatched
    Manual,
}

/// Per-policy-type capability flags of a carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub api_support: bool,
    /// Can only give indicative prices, never a bindable quote
    pub pricing_only: bool,
    pub bind_support: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            api_support: true,
            pricing_only: false,
            bind_support: false,
        }
    }
}

/// Agency configuration for one (insurer, policy type) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsurerPolicyConfig {
    pub enabled: bool,
    pub transport: Transport,
    pub tier: Tier,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl Default for InsurerPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transport: Transport::Api,
            tier: Tier::FIRST,
            capabilities: Capabilities::default(),
        }
    }
}

impl InsurerPolicyConfig {
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

/// A carrier the agency can quote with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurer {
    pub id: String,
    pub name: String,
    /// Adapter lookup key
    pub slug: String,
    /// Supported policy types and their configuration
    #[serde(default)]
    pub policies: BTreeMap<PolicyType, InsurerPolicyConfig>,
}

impl Insurer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            policies: BTreeMap::new(),
        }
    }

    pub fn supporting(mut self, policy_type: PolicyType, config: InsurerPolicyConfig) -> Self {
        self.policies.insert(policy_type, config);
        self
    }

    pub fn supports(&self, policy_type: &PolicyType) -> bool {
        self.policies.contains_key(policy_type)
    }

    pub fn config_for(&self, policy_type: &PolicyType) -> Option<&InsurerPolicyConfig> {
        self.policies.get(policy_type)
    }
}

/// Immutable snapshot of everything one quoting run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequestContext {
    pub application: Application,
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub insurers: Vec<Insurer>,
    /// When present, only these insurer ids may be dispatched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_insurers: Option<BTreeSet<String>>,
}

impl QuoteRequestContext {
    pub fn new(application: Application, policies: Vec<Policy>, insurers: Vec<Insurer>) -> Self {
        Self {
            application,
            policies,
            insurers,
            allowed_insurers: None,
        }
    }

    pub fn with_allowed_insurers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_insurers = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn policy(&self, policy_type: &PolicyType) -> Option<&Policy> {
        self.policies.iter().find(|p| &p.policy_type == policy_type)
    }

    pub fn insurer(&self, id: &str) -> Option<&Insurer> {
        self.insurers.iter().find(|i| i.id == id)
    }

    /// Requested policy types in request order, without duplicates
    pub fn policy_types(&self) -> Vec<PolicyType> {
        let mut seen = BTreeSet::new();
        self.policies
            .iter()
            .filter(|p| seen.insert(p.policy_type.clone()))
            .map(|p| p.policy_type.clone())
            .collect()
    }

    pub fn is_allowed(&self, insurer_id: &str) -> bool {
        self.allowed_insurers
            .as_ref()
            .is_none_or(|allowed| allowed.contains(insurer_id))
    }
}
