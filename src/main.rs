//! Voidance configuration tool - validates and generates desktop configuration files.
//!
//! Prints its report on stdout and exits nonzero when any checked
//! configuration is invalid or any file could not be generated.

use std::{env, process::ExitCode};

use tracing::debug;
use voidance_config::{
    cli::{CliError, CliService, formatting::format_error},
    tracing_config,
};

fn main() -> ExitCode {
    let (verbose, args) = CliService::split_verbose(env::args().skip(1).collect());

    if let Err(e) = tracing_config::init_cli_mode(verbose) {
        eprintln!("{}", format_error(&format!("Failed to initialise logging: {e}")));
    }

    debug!(?args, "Starting");
    run_cli_command(&args)
}

/// Executes the command named in `args` and maps its verdict to an exit code.
fn run_cli_command(args: &[String]) -> ExitCode {
    let cli_service = CliService::new();

    match cli_service.execute(args) {
        Ok(output) => {
            if !output.text.trim().is_empty() {
                println!("{}", output.text);
            }
            if output.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            if matches!(e, CliError::CommandNotFound(_)) {
                eprintln!("Use 'help' for usage information");
            }
            ExitCode::FAILURE
        }
    }
}
