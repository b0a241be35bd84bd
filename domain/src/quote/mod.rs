//! Quote request entities and adapter outcome value objects.

pub mod entities;
pub mod value_objects;

pub use entities::{
    Application, ApplicationId, Capabilities, Claim, Insurer, InsurerPolicyConfig, Policy,
    QuoteRequestContext, Transport,
};
pub use value_objects::{PaymentPlan, QuoteArtifact, QuoteOutcome};
