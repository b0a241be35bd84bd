//! Carrier adapters
//!
//! [`ScriptedCarrierAdapter`] answers from configuration instead of a live
//! carrier API. It still goes through the full adapter contract (limit
//! selection, status normalization, quote letter retrieval) so dry runs
//! exercise the same scheduler paths as production integrations.

mod registry;
mod scripted;

pub use registry::build_registry;
pub use scripted::{CarrierScript, ScriptedCarrierAdapter};
