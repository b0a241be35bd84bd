//! Policy type value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Line of coverage requested on an application (Value Object)
///
/// Carriers register one adapter per policy type they write, so this is
/// half of every adapter lookup key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyType {
    /// Business owner's policy
    Bop,
    /// General liability
    Gl,
    /// Workers' compensation
    Wc,
    /// Professional liability / errors and omissions
    Pl,
    Cyber,
    CommercialAuto,
    Umbrella,
    // Lines without first-class support
    Custom(String),
}

impl PolicyType {
    /// Get the string identifier for this policy type
    pub fn as_str(&self) -> &str {
        match self {
            PolicyType::Bop => "BOP",
            PolicyType::Gl => "GL",
            PolicyType::Wc => "WC",
            PolicyType::Pl => "PL",
            PolicyType::Cyber => "CYBER",
            PolicyType::CommercialAuto => "AUTO",
            PolicyType::Umbrella => "UMBRELLA",
            PolicyType::Custom(s) => s,
        }
    }

    /// Check if coverage is expressed as compound limits (occurrence/aggregate)
    pub fn has_compound_limits(&self) -> bool {
        matches!(
            self,
            PolicyType::Bop | PolicyType::Gl | PolicyType::Pl | PolicyType::Cyber
        )
    }
}

impl std::fmt::Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PolicyType {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Ok(match upper.as_str() {
            "" => return Err(DomainError::InvalidPolicyType(s.to_string())),
            "BOP" => PolicyType::Bop,
            "GL" => PolicyType::Gl,
            "WC" => PolicyType::Wc,
            "PL" | "EO" => PolicyType::Pl,
            "CYBER" => PolicyType::Cyber,
            "AUTO" | "CA" => PolicyType::CommercialAuto,
            "UMBRELLA" => PolicyType::Umbrella,
            _ => PolicyType::Custom(upper),
        })
    }
}

impl Serialize for PolicyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_roundtrip() {
        for policy_type in [
            PolicyType::Bop,
            PolicyType::Gl,
            PolicyType::Wc,
            PolicyType::Pl,
            PolicyType::Cyber,
            PolicyType::CommercialAuto,
            PolicyType::Umbrella,
        ] {
            let parsed: PolicyType = policy_type.to_string().parse().unwrap();
            assert_eq!(policy_type, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("bop".parse::<PolicyType>().unwrap(), PolicyType::Bop);
        assert_eq!(" gl ".parse::<PolicyType>().unwrap(), PolicyType::Gl);
    }

    #[test]
    fn test_custom_policy_type() {
        let policy_type: PolicyType = "inland-marine".parse().unwrap();
        assert_eq!(policy_type, PolicyType::Custom("INLAND-MARINE".to_string()));
        assert_eq!(policy_type.to_string(), "INLAND-MARINE");
    }

    #[test]
    fn test_empty_policy_type_rejected() {
        assert!("  ".parse::<PolicyType>().is_err());
    }

    #[test]
    fn test_works_as_json_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(PolicyType::Wc, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"WC":2}"#);
        let back: std::collections::BTreeMap<PolicyType, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&PolicyType::Wc), Some(&2));
    }
}
