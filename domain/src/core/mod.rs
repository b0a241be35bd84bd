//! Core domain concepts shared across all subdomains.
//!
//! - [`status::CanonicalStatus`]: normalized carrier outcome, totally ordered
//! - [`policy_type::PolicyType`]: line of coverage (BOP, GL, WC, ...)
//! - [`lifecycle::ApplicationStatus`]: application lifecycle and quotable window
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod lifecycle;
pub mod policy_type;
pub mod status;
