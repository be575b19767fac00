//! Logging setup for the demo binary.
//!
//! Demo text goes to stdout; diagnostics go to stderr through `tracing`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "ocp_dispatch=info";
const VERBOSE_LOG_FILTER: &str = "ocp_dispatch=debug";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the default.
pub fn filter_directive(verbose: bool) -> String {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => VERBOSE_LOG_FILTER.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install a stderr fmt subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
