//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for quoting and pricing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every task result, grouped by policy type
    Full,
    /// Best result per policy type (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
