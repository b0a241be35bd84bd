//! Application layer for quote-orchestrator
//!
//! This crate contains the quoting and pricing use cases, the port
//! definitions carrier integrations and sinks implement, the adapter
//! registry and the bounded retry helper. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod registry;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DispatchParams, RetryPolicy};
pub use ports::{
    document_fetcher::{Document, DocumentFetcher, FetchError},
    insurer_adapter::{AdapterError, AdapterFactory, InsurerAdapter},
    partner_notifier::{NoPartnerNotifier, PartnerNotifier},
    progress::{NoProgress, QuotingProgress},
    quote_recorder::{NoQuoteRecorder, QuoteRecorder, RecorderError},
};
pub use registry::{AdapterRegistry, RegistryError};
pub use retry::fetch_with_retry;
pub use use_cases::run_pricing::{RunPricingError, RunPricingUseCase};
pub use use_cases::run_quoting::{RunQuotingError, RunQuotingUseCase};
