//! CLI entrypoint for advisor-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_mcp_application::InvokeToolUseCase;
use advisor_mcp_domain::{PATH_TO_SOURCE_CODE, ToolCall, ToolRegistry};
use advisor_mcp_infrastructure::{
    ConfigLoader, FileConfig, JsonSchemaToolConverter, JsonlInvocationLogger, Severity,
    ShellCommandExecutor, is_advisor_installed,
};
use advisor_mcp_presentation::{Cli, ConsoleFormatter, OutputFormat, RequestHandler, StdioServer};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()?
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    if let Some(url) = &cli.server_url {
        config.advisor.server_url = url.clone();
    }

    let log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting advisor-mcp {}", env!("CARGO_PKG_VERSION"));

    report_config_issues(&config)?;

    // === Dependency Injection ===
    let settings = config.advisor.to_settings();
    if !is_advisor_installed(&settings) {
        warn!(
            "Advisor executable '{}' was not found on PATH; tool calls will fail",
            settings.executable
        );
    }
    info!("Using advisor server {}", settings.server_url);

    let shutdown = CancellationToken::new();
    let registry = Arc::new(ToolRegistry::new(settings.clone()));
    let executor =
        Arc::new(ShellCommandExecutor::new(settings).with_cancellation(shutdown.clone()));

    let mut use_case = InvokeToolUseCase::new(registry, executor);
    if let Some(path) = &config.logging.invocation_log
        && let Some(logger) = JsonlInvocationLogger::new(path)
    {
        info!("Recording invocations to {}", logger.path().display());
        use_case = use_case.with_invocation_logger(Arc::new(logger));
    }

    if cli.list_tools {
        let tools = use_case.registry().list_tools();
        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_tools(tools),
            OutputFormat::Json => ConsoleFormatter::format_tools_json(tools),
        };
        println!("{}", output);
        return Ok(());
    }

    spawn_shutdown_listener(shutdown.clone());

    if let Some(tool) = &cli.call {
        let path = cli.path.clone().unwrap_or_default();
        let call = ToolCall::new(tool.as_str()).with_arg(PATH_TO_SOURCE_CODE, path);
        let result = use_case.execute(&call).await?;

        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_result(tool, &result),
            OutputFormat::Json => ConsoleFormatter::format_result_json(&result),
        };
        println!("{}", output);

        if !result.succeeded {
            drop(log_guard);
            std::process::exit(1);
        }
        return Ok(());
    }

    let handler = RequestHandler::new(use_case, Arc::new(JsonSchemaToolConverter));
    StdioServer::new(handler, shutdown).serve_stdio().await?;

    info!("advisor-mcp stopped");
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Diagnostics always go to stderr; stdout carries protocol traffic.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn report_config_issues(config: &FileConfig) -> Result<()> {
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    if config.has_errors() {
        bail!("invalid configuration, see the errors above");
    }
    Ok(())
}

/// Cancel `shutdown` on Ctrl-C so in-flight calls report `Interrupted`
fn spawn_shutdown_listener(shutdown: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down");
                shutdown.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });
}
