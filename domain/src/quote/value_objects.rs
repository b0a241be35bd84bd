//! Quote value objects - immutable outcomes returned by insurer adapters.
//!
//! - [`QuoteOutcome`] - what one adapter call produced
//! - [`PaymentPlan`] - an installment offer attached to a quote
//! - [`QuoteArtifact`] - a side document retrieved for a quote (e.g. quote letter)

use crate::core::status::CanonicalStatus;
use crate::limits::Limits;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Installment offer returned alongside a premium
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub name: String,
    pub installments: u32,
    pub down_payment: Decimal,
    pub installment_amount: Decimal,
}

/// Document retrieved through a side channel after the carrier answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteArtifact {
    pub name: String,
    pub location: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Outcome of one adapter call, normalized into the canonical taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteOutcome {
    pub status: CanonicalStatus,
    /// Premium or indicative price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Limits the carrier actually quoted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductible: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decline_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_plans: Vec<PaymentPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<QuoteArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_reference: Option<String>,
    /// The agency partner must be told about this outcome
    #[serde(default)]
    pub notify_partner: bool,
}

impl QuoteOutcome {
    /// Creates an outcome with the given status and no other data.
    pub fn new(status: CanonicalStatus) -> Self {
        Self {
            status,
            amount: None,
            limits: None,
            deductible: None,
            decline_reasons: Vec::new(),
            error_reasons: Vec::new(),
            payment_plans: Vec::new(),
            artifacts: Vec::new(),
            carrier_reference: None,
            notify_partner: false,
        }
    }

    /// Bindable quote at the given premium.
    pub fn quoted(amount: Decimal) -> Self {
        Self::new(CanonicalStatus::Quoted).with_amount(amount)
    }

    /// Referral, optionally with an indicative premium.
    pub fn referred(amount: Option<Decimal>) -> Self {
        let mut outcome = Self::new(CanonicalStatus::Referred);
        outcome.amount = amount;
        outcome
    }

    pub fn declined(reasons: Vec<String>) -> Self {
        let mut outcome = Self::new(CanonicalStatus::Declined);
        outcome.decline_reasons = reasons;
        outcome
    }

    pub fn autodeclined(reasons: Vec<String>) -> Self {
        let mut outcome = Self::new(CanonicalStatus::Autodeclined);
        outcome.decline_reasons = reasons;
        outcome
    }

    pub fn outage(reason: impl Into<String>) -> Self {
        let mut outcome = Self::new(CanonicalStatus::Outage);
        outcome.error_reasons.push(reason.into());
        outcome
    }

    /// Infrastructure failure recorded as a status.
    pub fn error(reason: impl Into<String>) -> Self {
        let mut outcome = Self::new(CanonicalStatus::Error);
        outcome.error_reasons.push(reason.into());
        outcome
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_deductible(mut self, deductible: u64) -> Self {
        self.deductible = Some(deductible);
        self
    }

    pub fn with_payment_plan(mut self, plan: PaymentPlan) -> Self {
        self.payment_plans.push(plan);
        self
    }

    pub fn with_artifact(mut self, artifact: QuoteArtifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn with_carrier_reference(mut self, reference: impl Into<String>) -> Self {
        self.carrier_reference = Some(reference.into());
        self
    }

    pub fn notifying_partner(mut self) -> Self {
        self.notify_partner = true;
        self
    }

    /// Whether this outcome makes its policy type complete.
    pub fn satisfies_completion(&self) -> bool {
        self.status.satisfies_completion(self.amount)
    }

    /// A price usable for indications: positive, on a referral or better.
    pub fn usable_price(&self) -> Option<Decimal> {
        self.amount
            .filter(|amount| *amount > Decimal::ZERO && self.status >= CanonicalStatus::Referred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referred_completion_depends_on_amount() {
        assert!(!QuoteOutcome::referred(Some(Decimal::ZERO)).satisfies_completion());
        assert!(QuoteOutcome::referred(Some(Decimal::from(120_000))).satisfies_completion());
        assert!(!QuoteOutcome::referred(None).satisfies_completion());
    }

    #[test]
    fn test_usable_price_ignores_failures_and_zero() {
        assert_eq!(
            QuoteOutcome::quoted(Decimal::from(900)).usable_price(),
            Some(Decimal::from(900))
        );
        assert_eq!(QuoteOutcome::quoted(Decimal::ZERO).usable_price(), None);
        assert_eq!(
            QuoteOutcome::outage("down").with_amount(Decimal::from(10)).usable_price(),
            None
        );
    }

    #[test]
    fn test_error_keeps_reason() {
        let outcome = QuoteOutcome::error("connection reset");
        assert_eq!(outcome.status, CanonicalStatus::Error);
        assert_eq!(outcome.error_reasons, vec!["connection reset".to_string()]);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_value(QuoteOutcome::declined(vec!["class code".into()])).unwrap();
        assert_eq!(json["status"], "declined");
        assert!(json.get("amount").is_none());
        assert!(json.get("payment_plans").is_none());
        assert_eq!(json["decline_reasons"][0], "class code");
    }
}
