//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for quoting and pricing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every task result, grouped by policy type
    Full,
    /// Best result per policy type
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quoting_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => quoting_domain::OutputFormat::Full,
            OutputFormat::Summary => quoting_domain::OutputFormat::Summary,
            OutputFormat::Json => quoting_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quote-orchestrator
#[derive(Parser, Debug)]
#[command(name = "quote-orchestrator")]
#[command(author, version, about = "Tiered multi-carrier quoting for commercial insurance")]
#[command(long_about = r#"
Quote Orchestrator fans an application out to every eligible carrier and
collects quotes tier by tier.

Carriers are grouped into tiers per policy type. Tier 1 runs first, all of
its carriers concurrently. A policy type stops as soon as one tier produced
a bindable quote (or a referral with a price); the others move on to the
next tier.

Configuration files are loaded from (in priority order):
1. QUOTING_* environment variables
2. --config <path>     Explicit config file
3. ./quoting.toml      Project-level config
4. ~/.config/quote-orchestrator/config.toml   Global config

Example:
  quote-orchestrator quote request.json
  quote-orchestrator price request.json --output json
  quote-orchestrator -vv --config agency.toml quote request.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to the configured format, then summary)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Also write operation logs to daily rolling files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run tiered quoting for a request file
    Quote {
        /// JSON quote request
        request: PathBuf,
    },
    /// Collect indicative prices from every eligible carrier
    Price {
        /// JSON quote request
        request: PathBuf,
    },
    /// Show configuration file locations and the effective settings
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let cli = Cli::parse_from(["quote-orchestrator", "-vv", "quote", "request.json", "-o", "json"]);
        assert_eq!(
            cli.command,
            Command::Quote {
                request: PathBuf::from("request.json")
            }
        );
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_show_config_with_flags() {
        let cli = Cli::parse_from(["quote-orchestrator", "show-config", "--no-config", "--quiet"]);
        assert_eq!(cli.command, Command::ShowConfig);
        assert!(cli.no_config);
        assert!(cli.quiet);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_request_is_required() {
        assert!(Cli::try_parse_from(["quote-orchestrator", "price"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
