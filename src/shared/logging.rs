//! Diagnostic logging on stderr.
//!
//! Stdout is reserved for command output, so every event goes to stderr.

use std::io::IsTerminal;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from a directive, falling back to `warn` when it is
/// absent or does not parse. The parse error is returned so it can be
/// reported once the subscriber is installed.
fn resolve_filter(directive: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(e)) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Install the global subscriber. Calling this more than once is a no-op.
pub fn init(directive: Option<&str>) {
    let (filter, rejected) = resolve_filter(directive);

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init();

    if let Some(e) = rejected {
        tracing::warn!(error = %e, "ignoring invalid log filter, using {DEFAULT_FILTER}");
    }
}
