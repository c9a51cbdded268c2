//! Logging setup for the prism CLI.
//!
//! Library crates log through `tracing`; this module installs the subscriber
//! that renders those events on stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use prism_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false, None);
//! info!("assembling variants");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "prism=debug,prism_cli=debug,prism_config=debug,prism_variants=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing subscriber.
///
/// The filter is picked in this order:
/// 1. `--verbose`: debug for the prism crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. `configured`, the `settings.log_level` from the prism config
/// 5. warnings for the prism crates
///
/// Should be called once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, configured: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_filter(configured.unwrap_or(DEFAULT_LEVEL))))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Expand a bare level into a filter scoped to the prism crates.
///
/// Anything that already looks like a directive list is passed through.
pub fn level_filter(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    ["prism", "prism_cli", "prism_config", "prism_variants"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
