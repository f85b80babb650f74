//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr through `tracing-subscriber` and are off unless a level
//! is requested, so the token listing is never mixed with log lines.

use std::io;

use tracing_subscriber::EnvFilter;

/// Default filter: silent.
pub const DEFAULT_FILTER: &str = "off";

/// Validate a filter given on the command line or in `LOXLEX_LOG`.
pub fn parse_filter(directives: &str) -> Result<String, String> {
    EnvFilter::try_new(directives)
        .map(|_| directives.to_owned())
        .map_err(|err| format!("invalid log filter '{directives}': {err}"))
}

pub fn init(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .without_time()
        .compact()
        .init();
}
