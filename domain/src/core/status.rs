//! Canonical quote status taxonomy.
//!
//! Every carrier adapter maps its own vocabulary onto [`CanonicalStatus`].
//! The variants are declared in ascending order so the derived `Ord` is the
//! business order: `error < declined < autodeclined < outage < referred < quoted`.

use super::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized outcome of one adapter task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
    /// Infrastructure failure or unrecognised carrier answer
    Error,
    /// Carrier underwriter declined
    Declined,
    /// Carrier rules declined without human review
    Autodeclined,
    /// Carrier system unavailable
    Outage,
    /// Sent to carrier underwriting, possibly with an indicative price
    Referred,
    /// Bindable quote
    Quoted,
}

impl CanonicalStatus {
    /// All statuses in ascending order.
    pub const ALL: [CanonicalStatus; 6] = [
        CanonicalStatus::Error,
        CanonicalStatus::Declined,
        CanonicalStatus::Autodeclined,
        CanonicalStatus::Outage,
        CanonicalStatus::Referred,
        CanonicalStatus::Quoted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalStatus::Error => "error",
            CanonicalStatus::Declined => "declined",
            CanonicalStatus::Autodeclined => "autodeclined",
            CanonicalStatus::Outage => "outage",
            CanonicalStatus::Referred => "referred",
            CanonicalStatus::Quoted => "quoted",
        }
    }

    /// Whether a task ending with this status and amount makes its policy
    /// type complete.
    ///
    /// Anything strictly above `referred` counts. A `referred` outcome counts
    /// only when it carries a positive amount.
    pub fn satisfies_completion(self, amount: Option<Decimal>) -> bool {
        match self {
            CanonicalStatus::Quoted => true,
            CanonicalStatus::Referred => amount.is_some_and(|a| a > Decimal::ZERO),
            _ => false,
        }
    }

    /// Whether the carrier made a business decision against the risk.
    pub fn is_decline(self) -> bool {
        matches!(self, CanonicalStatus::Declined | CanonicalStatus::Autodeclined)
    }

    /// Whether the outcome comes from a failure rather than a decision.
    pub fn is_failure(self) -> bool {
        matches!(self, CanonicalStatus::Error | CanonicalStatus::Outage)
    }

    /// Lenient mapping from the labels carriers commonly return.
    ///
    /// Unknown labels map to [`CanonicalStatus::Error`].
    pub fn from_carrier_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "quoted" | "quote" | "bound" | "bindable" | "issued" | "approved" | "success" => {
                CanonicalStatus::Quoted
            }
            "referred" | "refer" | "referral" | "pending" | "underwriterreview" | "review" => {
                CanonicalStatus::Referred
            }
            "outage" | "unavailable" | "down" | "maintenance" | "serviceunavailable" => {
                CanonicalStatus::Outage
            }
            "autodeclined" | "autodecline" | "ineligible" | "outofappetite" | "knockout" => {
                CanonicalStatus::Autodeclined
            }
            "declined" | "decline" | "rejected" | "denied" => CanonicalStatus::Declined,
            _ => CanonicalStatus::Error,
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CanonicalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_strict_total_order() {
        let mut sorted = CanonicalStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, CanonicalStatus::ALL);
        assert!(CanonicalStatus::Error < CanonicalStatus::Declined);
        assert!(CanonicalStatus::Declined < CanonicalStatus::Autodeclined);
        assert!(CanonicalStatus::Autodeclined < CanonicalStatus::Outage);
        assert!(CanonicalStatus::Outage < CanonicalStatus::Referred);
        assert!(CanonicalStatus::Referred < CanonicalStatus::Quoted);
    }

    #[test]
    fn test_referred_without_amount_does_not_complete() {
        assert!(!CanonicalStatus::Referred.satisfies_completion(None));
        assert!(!CanonicalStatus::Referred.satisfies_completion(Some(Decimal::ZERO)));
    }

    #[test]
    fn test_priced_referral_completes() {
        assert!(CanonicalStatus::Referred.satisfies_completion(Some(Decimal::from(120_000))));
    }

    #[test]
    fn test_quoted_completes_even_without_amount() {
        assert!(CanonicalStatus::Quoted.satisfies_completion(None));
    }

    #[test]
    fn test_lower_statuses_never_complete() {
        for status in [
            CanonicalStatus::Error,
            CanonicalStatus::Declined,
            CanonicalStatus::Autodeclined,
            CanonicalStatus::Outage,
        ] {
            assert!(!status.satisfies_completion(Some(Decimal::from(5_000))));
        }
    }

    #[test]
    fn test_from_carrier_label() {
        assert_eq!(CanonicalStatus::from_carrier_label("Bound"), CanonicalStatus::Quoted);
        assert_eq!(CanonicalStatus::from_carrier_label("REFER"), CanonicalStatus::Referred);
        assert_eq!(
            CanonicalStatus::from_carrier_label("out-of-appetite"),
            CanonicalStatus::Autodeclined
        );
        assert_eq!(
            CanonicalStatus::from_carrier_label("service unavailable"),
            CanonicalStatus::Outage
        );
        assert_eq!(CanonicalStatus::from_carrier_label("Declined"), CanonicalStatus::Declined);
        assert_eq!(CanonicalStatus::from_carrier_label("???"), CanonicalStatus::Error);
    }

    #[test]
    fn test_parse_round_trip_and_reject() {
        assert_eq!("referred".parse::<CanonicalStatus>().unwrap(), CanonicalStatus::Referred);
        assert!("refer".parse::<CanonicalStatus>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&CanonicalStatus::Autodeclined).unwrap();
        assert_eq!(json, "\"autodeclined\"");
    }
}
