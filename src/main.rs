use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use projects_directory::cli::{app::parse_error_message, output, run, Cli, LogLevel};

/// Initialize tracing. Logs go to stderr so prompts on stdout stay clean;
/// `RUST_LOG` wins over `--log-level` when set.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Print `Error: ...` and the usage text, then fail with exit code 1
fn report_failure(message: &str) -> ExitCode {
    let mut stdout = io::stdout();
    let printed = output::print_error(&mut stdout, message)
        .and_then(|_| output::print_usage(&mut stdout));
    if let Err(e) = printed {
        eprintln!("Error: {}", message);
        eprintln!("Failed to write to stdout: {}", e);
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return report_failure(&parse_error_message(&e)),
    };

    initialize_tracing(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            report_failure(&e.to_string())
        }
    }
}
