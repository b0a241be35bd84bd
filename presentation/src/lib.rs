//! Presentation layer for quote-orchestrator
//!
//! This crate contains CLI definitions, report formatters and progress
//! reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, render};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
