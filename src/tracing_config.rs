use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for command-line use
///
/// Logs go to stderr so they never mix with the report on stdout.
/// Uses the RUST_LOG environment variable if set, otherwise defaults to
/// "warn", or "debug" when `verbose` is set. Supports both compact console
/// output and JSON output based on VOIDANCE_LOG_FORMAT.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init_cli_mode(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let format = env::var("VOIDANCE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
