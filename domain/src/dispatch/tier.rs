//! Tier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Fallback priority bucket for one (insurer, policy type) pair.
///
/// Lower tiers run first; insurers sharing a tier run concurrently. Tiers
/// start at 1 and an absent assignment means tier 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tier(u32);

impl Tier {
    pub const FIRST: Tier = Tier(1);

    pub fn new(level: u32) -> Result<Self, DomainError> {
        if level == 0 {
            return Err(DomainError::InvalidTier(level));
        }
        Ok(Self(level))
    }

    pub fn level(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Tier {
        Tier(self.0.saturating_add(1))
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::FIRST
    }
}

impl TryFrom<u32> for Tier {
    type Error = DomainError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Tier::new(level)
    }
}

impl From<Tier> for u32 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tier {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Tier::new(0), Err(DomainError::InvalidTier(0)));
        assert!(serde_json::from_str::<Tier>("0").is_err());
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(Tier::default(), Tier::FIRST);
        assert_eq!(Tier::FIRST.level(), 1);
    }

    #[test]
    fn test_next_and_order() {
        let second = Tier::FIRST.next();
        assert_eq!(second.level(), 2);
        assert!(Tier::FIRST < second);
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let tier: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(tier.level(), 3);
        assert_eq!(serde_json::to_string(&tier).unwrap(), "3");
    }
}
