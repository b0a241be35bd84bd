//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_fetcher;
pub mod insurer_adapter;
pub mod partner_notifier;
pub mod progress;
pub mod quote_recorder;
