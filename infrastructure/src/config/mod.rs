//! Configuration file loading for quote-orchestrator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTING_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quoting.toml` or `./.quoting.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quote-orchestrator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    CarrierScripts, ConfigValidationError, FileCarrierConfig, FileCarrierPolicyScript, FileConfig,
    FileDispatchConfig, FileInsurerConfig, FileInsurerPolicyConfig, FileLoggingConfig,
    FileOutputConfig, FileRetryConfig,
};
pub use loader::ConfigLoader;
