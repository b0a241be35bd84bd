//! Logging infrastructure: quote records and partner notifications.
//!
//! Provides [`JsonlQuoteRecorder`] and [`InMemoryQuoteRecorder`], which
//! implement the [`QuoteRecorder`](quoting_application::QuoteRecorder) port,
//! and [`LogPartnerNotifier`].

mod jsonl_recorder;
mod memory_recorder;
mod partner_notifier;

pub use jsonl_recorder::JsonlQuoteRecorder;
pub use memory_recorder::InMemoryQuoteRecorder;
pub use partner_notifier::LogPartnerNotifier;
