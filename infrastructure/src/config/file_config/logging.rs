//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// quote_log = "~/.local/share/quote-orchestrator/quotes.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per settled task
    pub quote_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// The quote log path with a leading `~` expanded.
    pub fn quote_log_path(&self) -> Option<PathBuf> {
        let path = self.quote_log.as_ref()?;
        match path.strip_prefix("~") {
            Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
            Err(_) => Some(path.clone()),
        }
    }
}
