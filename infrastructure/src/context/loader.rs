//! JSON quote request files.
//!
//! # Format
//!
//! ```json
//! {
//!   "application": { "id": "app-1", "business_name": "Acme Bakery", "agency_id": "agency-7" },
//!   "policies": [
//!     { "policy_type": "GL", "effective_date": "2026-11-01",
//!       "limits": { "per_occurrence": 1000000, "aggregate": 2000000 } }
//!   ],
//!   "allowed_insurers": ["hartwell"]
//! }
//! ```
//!
//! `insurers` may be given inline; otherwise the configured roster is used.

use quoting_domain::{Application, Insurer, Policy, QuoteRequestContext};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ContextLoadError {
    #[error("Failed to read request file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of a quote request
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequestFile {
    pub application: Application,
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub insurers: Option<Vec<Insurer>>,
    #[serde(default)]
    pub allowed_insurers: Option<BTreeSet<String>>,
}

impl QuoteRequestFile {
    pub fn into_context(self, roster: &[Insurer]) -> QuoteRequestContext {
        let insurers = self.insurers.unwrap_or_else(|| roster.to_vec());
        let context = QuoteRequestContext::new(self.application, self.policies, insurers);
        match self.allowed_insurers {
            Some(allowed) => context.with_allowed_insurers(allowed),
            None => context,
        }
    }
}

/// Read a request file and build the run context.
pub fn load_request(path: &Path, roster: &[Insurer]) -> Result<QuoteRequestContext, ContextLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContextLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: QuoteRequestFile =
        serde_json::from_str(&content).map_err(|source| ContextLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded request for application {} with {} policies",
        file.application.id,
        file.policies.len()
    );
    Ok(file.into_context(roster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoting_domain::{ApplicationStatus, InsurerPolicyConfig, LimitAxis, PolicyType};

    const REQUEST: &str = r#"{
        "application": { "id": "app-1", "business_name": "Acme Bakery", "agency_id": "agency-7" },
        "policies": [
            { "policy_type": "GL", "effective_date": "2026-11-01",
              "limits": { "per_occurrence": 1000000, "aggregate": 2000000 },
              "deductible": 1000 },
            { "policy_type": "wc", "effective_date": "2026-11-01" }
        ],
        "allowed_insurers": ["hartwell"]
    }"#;

    fn roster() -> Vec<Insurer> {
        vec![Insurer::new("hartwell", "Hartwell", "hartwell")
            .supporting(PolicyType::Gl, InsurerPolicyConfig::default())]
    }

    #[test]
    fn test_load_request_uses_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, REQUEST).unwrap();

        let context = load_request(&path, &roster()).unwrap();

        assert_eq!(context.application.id.as_str(), "app-1");
        assert_eq!(context.application.status, ApplicationStatus::Incomplete);
        assert_eq!(context.policy_types(), vec![PolicyType::Gl, PolicyType::Wc]);
        assert_eq!(
            context.policy(&PolicyType::Gl).unwrap().limits.get(LimitAxis::Aggregate),
            Some(2_000_000)
        );
        assert_eq!(context.insurers.len(), 1);
        assert!(context.is_allowed("hartwell"));
        assert!(!context.is_allowed("ridge"));
    }

    #[test]
    fn test_inline_insurers_win() {
        let file: QuoteRequestFile = serde_json::from_str(
            r#"{
                "application": { "id": "app-2", "business_name": "B", "agency_id": "a", "status": "questions_done" },
                "policies": [],
                "insurers": []
            }"#,
        )
        .unwrap();
        let context = file.into_context(&roster());
        assert!(context.insurers.is_empty());
        assert_eq!(context.application.status, ApplicationStatus::QuestionsDone);
    }

    #[test]
    fn test_missing_file() {
        let err = load_request(Path::new("/definitely/not/here.json"), &[]).unwrap_err();
        assert!(matches!(err, ContextLoadError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_request(&path, &[]).unwrap_err();
        assert!(matches!(err, ContextLoadError::Parse { .. }));
    }
}
