//! Presentation-level configuration
//!
//! Resolves how reports are shown from the CLI flags and the `[output]`
//! section of the configuration file.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use quoting_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators while tiers run
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Summary,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over the configured values.
    ///
    /// JSON output never shows progress so stdout stays machine-readable.
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        configured_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format
            .map(OutputFormat::from)
            .or(configured_format)
            .unwrap_or_default();
        Self {
            format,
            color,
            show_progress: !quiet && format != OutputFormat::Json,
        }
    }
}
