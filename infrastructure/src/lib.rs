//! Infrastructure layer for quote-orchestrator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, request file
//! loading, scripted carrier adapters, document fetchers and quote record
//! sinks.

pub mod carriers;
pub mod config;
pub mod context;
pub mod documents;
pub mod logging;

// Re-export commonly used types
pub use carriers::{CarrierScript, ScriptedCarrierAdapter, build_registry};
pub use config::{
    CarrierScripts, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
};
pub use context::{ContextLoadError, QuoteRequestFile, load_request};
#[cfg(feature = "http-documents")]
pub use documents::HttpDocumentFetcher;
pub use documents::LocalDocumentFetcher;
pub use logging::{InMemoryQuoteRecorder, JsonlQuoteRecorder, LogPartnerNotifier};
