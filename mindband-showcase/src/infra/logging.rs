//! Tracing subscriber setup for the showcase binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,mindband_showcase=info";
/// Default directives under `--verbose`.
pub const VERBOSE_FILTER: &str = "info,mindband_showcase=debug";

/// Build the filter: `RUST_LOG` wins, otherwise fall back to the defaults.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable. Safe to call more than once.
pub fn init_logger(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
