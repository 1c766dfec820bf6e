use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Used when `RUST_LOG` is unset. Reports go to stdout, so diagnostics stay
/// quiet unless something is wrong.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Pretty,
}

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for filtering (defaults to "warn" if not set)
/// - Always writes to stderr so that report output on stdout stays clean
/// - JSON output flattens event fields into the top-level object
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
