use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use version_monitor::config::Config;

#[derive(Parser, Debug)]
#[command(name = "version-monitor")]
#[command(version, about = "Render a dashboard of deployed versions versus latest releases")]
struct Cli {
    /// Write the dashboard here instead of the configured path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "VERSION_MONITOR_LOG_FILE")]
    log_file: Option<PathBuf>,
}

/// Opens `path` for appending, creating its directory if needed
fn log_file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "version-monitor.log".to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
}

/// Initialize the tracing subscriber.
///
/// `--debug` wins over `RUST_LOG`, which wins over the INFO default.
/// The returned guard must live until exit so buffered file logs are flushed.
fn init_tracing(debug: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>, InitError> {
    let filter = if debug {
        EnvFilter::new("version_monitor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("version_monitor=info"))
    };

    match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(filter)
                .init();
            Ok(None)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(output) = cli.output {
        config = config.with_output_path(output);
    }

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(version_monitor::monitor::run(&config))?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // No subscriber exists yet, so this failure can only go to stderr
    let _guard = match init_tracing(cli.debug, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to open log file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
