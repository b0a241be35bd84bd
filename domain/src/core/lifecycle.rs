//! Application lifecycle status

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where an application sits in its lifecycle.
///
/// Quoting may only start while the application is inside its quotable
/// window; see [`ApplicationStatus::is_quotable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Incomplete,
    QuestionsDone,
    Quoting,
    Quoted,
    /// Quoting ran cleanly but no carrier produced a usable offer
    QuotedNoOffers,
    /// No usable offer and at least one carrier failed
    QuotingFailed,
    Bound,
    Declined,
    Expired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Incomplete => "incomplete",
            ApplicationStatus::QuestionsDone => "questions_done",
            ApplicationStatus::Quoting => "quoting",
            ApplicationStatus::Quoted => "quoted",
            ApplicationStatus::QuotedNoOffers => "quoted_no_offers",
            ApplicationStatus::QuotingFailed => "quoting_failed",
            ApplicationStatus::Bound => "bound",
            ApplicationStatus::Declined => "declined",
            ApplicationStatus::Expired => "expired",
        }
    }

    /// Bound, declined and expired applications are past the window.
    pub fn is_quotable(&self) -> bool {
        !matches!(
            self,
            ApplicationStatus::Bound | ApplicationStatus::Declined | ApplicationStatus::Expired
        )
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "incomplete" => ApplicationStatus::Incomplete,
            "questions_done" => ApplicationStatus::QuestionsDone,
            "quoting" => ApplicationStatus::Quoting,
            "quoted" => ApplicationStatus::Quoted,
            "quoted_no_offers" => ApplicationStatus::QuotedNoOffers,
            "quoting_failed" => ApplicationStatus::QuotingFailed,
            "bound" => ApplicationStatus::Bound,
            "declined" => ApplicationStatus::Declined,
            "expired" => ApplicationStatus::Expired,
            other => return Err(DomainError::UnknownApplicationStatus(other.to_string())),
        })
    }
}
