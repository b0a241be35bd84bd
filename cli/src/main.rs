//! CLI entrypoint for Quote Orchestrator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quoting_application::{
    AdapterRegistry, DispatchParams, DocumentFetcher, NoQuoteRecorder, QuoteRecorder,
    RunPricingUseCase, RunQuotingUseCase,
};
use quoting_domain::{ApplicationStatus, DispatchMode, Severity};
use quoting_infrastructure::{
    ConfigLoader, FileConfig, JsonlQuoteRecorder, LogPartnerNotifier, build_registry,
    load_request,
};
use quoting_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, render,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Quote Orchestrator");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.command == Command::ShowConfig {
        show_config(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    for warning in config.check()? {
        warn!("{}", warning.message);
    }

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let params = config.dispatch_params();
    let roster = config.to_insurers();
    let registry = Arc::new(build_registry(
        &config.carrier_scripts(),
        Some(document_fetcher()?),
        &params.retry,
    )?);
    registry.validate(&roster)?;
    debug!("Registered adapters: {:?}", registry);

    let recorder: Arc<dyn QuoteRecorder> = match config.logging.quote_log_path() {
        Some(path) => Arc::new(JsonlQuoteRecorder::open(&path)?),
        None => Arc::new(NoQuoteRecorder),
    };

    match &cli.command {
        Command::Quote { request } => {
            run_quote(request, &roster, registry, params, recorder, &output).await
        }
        Command::Price { request } => {
            run_price(request, &roster, registry, recorder, &output).await
        }
        Command::ShowConfig => Ok(ExitCode::SUCCESS),
    }
}

async fn run_quote(
    request: &Path,
    roster: &[quoting_domain::Insurer],
    registry: Arc<AdapterRegistry>,
    params: DispatchParams,
    recorder: Arc<dyn QuoteRecorder>,
    output: &OutputConfig,
) -> Result<ExitCode> {
    let context = load_request(request, roster)?;
    registry.validate_dispatch(&context, DispatchMode::Quote)?;

    let use_case = RunQuotingUseCase::new(registry)
        .with_params(params)
        .with_recorder(recorder)
        .with_notifier(Arc::new(LogPartnerNotifier));

    let report = if output.show_progress {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&context, &progress).await?
    } else {
        use_case.execute(&context).await?
    };

    println!("{}", render(&ConsoleFormatter, &report, output.format));

    Ok(match report.status {
        ApplicationStatus::QuotingFailed => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    })
}

async fn run_price(
    request: &Path,
    roster: &[quoting_domain::Insurer],
    registry: Arc<AdapterRegistry>,
    recorder: Arc<dyn QuoteRecorder>,
    output: &OutputConfig,
) -> Result<ExitCode> {
    let context = load_request(request, roster)?;
    registry.validate_dispatch(&context, DispatchMode::Price)?;

    let report = RunPricingUseCase::new(registry)
        .with_recorder(recorder)
        .execute(&context)
        .await?;

    println!("{}", render(&ConsoleFormatter, &report, output.format));
    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level, optionally mirrored to
/// daily rolling files.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "quote-orchestrator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::new(level)),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(feature = "http-documents")]
fn document_fetcher() -> Result<Arc<dyn DocumentFetcher>> {
    let fetcher =
        quoting_infrastructure::HttpDocumentFetcher::new(std::time::Duration::from_secs(10))?;
    Ok(Arc::new(fetcher))
}

#[cfg(not(feature = "http-documents"))]
fn document_fetcher() -> Result<Arc<dyn DocumentFetcher>> {
    let root = std::env::current_dir().context("Failed to resolve working directory")?;
    Ok(Arc::new(quoting_infrastructure::LocalDocumentFetcher::new(root)))
}

fn show_config(config: &FileConfig) -> Result<()> {
    ConfigLoader::print_config_sources();
    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(config)?);

    let issues = config.validate();
    if !issues.is_empty() {
        println!("Issues:");
        for issue in issues {
            let label = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!("  [{}] {}", label, issue.message);
        }
    }
    Ok(())
}
