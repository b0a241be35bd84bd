//! Domain layer for quote-orchestrator
//!
//! This crate contains the core quoting vocabulary and the pure rules of
//! the orchestration engine. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Canonical status
//!
//! Every carrier answer is normalized into [`CanonicalStatus`], a strict
//! total order: `error < declined < autodeclined < outage < referred < quoted`.
//!
//! ## Tiers
//!
//! Each (insurer, policy type) pair carries a [`Tier`]. Lower tiers are tried
//! first; a policy type stops at the first tier producing a usable result
//! (see [`CompletionTracker`]).
//!
//! ## Nearest support
//!
//! [`select_nearest`] snaps requested limits and deductibles onto the
//! discrete values a carrier writes.

pub mod aggregate;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod limits;
pub mod quote;

// Re-export commonly used types
pub use aggregate::{PolicyTypeReport, PricingReport, PricingSummary, QuotingReport};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError, lifecycle::ApplicationStatus, policy_type::PolicyType,
    status::CanonicalStatus,
};
pub use dispatch::{
    AdapterKey, AdapterTask, CompletionTracker, DispatchMode, PolicyTypeCompletion, TaskResult,
    Tier, build_task_set,
};
pub use limits::{LimitAxis, Limits, SelectionError, SupportedLimits, select_nearest};
pub use quote::{
    Application, ApplicationId, Capabilities, Claim, Insurer, InsurerPolicyConfig, PaymentPlan,
    Policy, QuoteArtifact, QuoteOutcome, QuoteRequestContext, Transport,
};
