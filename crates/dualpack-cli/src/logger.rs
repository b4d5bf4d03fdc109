//! Logging infrastructure for the dualpack CLI.
//!
//! Structured logging through the `tracing` ecosystem. `dualpack-config`
//! only emits events; this module installs the subscriber that prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use dualpack_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Deriving descriptor");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ui;

const VERBOSE_FILTER: &str = "dualpack_config=debug,dualpack_cli=debug";
const QUIET_FILTER: &str = "dualpack_config=error,dualpack_cli=error";
const DEFAULT_FILTER: &str = "dualpack_config=info,dualpack_cli=info";

/// Pick the filter for the given flags.
///
/// 1. `--verbose`: DEBUG for dualpack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` when set
/// 4. INFO for dualpack crates
///
/// # Arguments
///
/// * `verbose` - The `--verbose` flag
/// * `quiet` - The `--quiet` flag
///
/// # Examples
///
/// ```
/// use dualpack_cli::logger::build_filter;
///
/// let filter = build_filter(true, false);
/// assert!(filter.to_string().contains("dualpack_config=debug"));
/// ```
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so `dualpack describe` can write JSON to stdout.
///
/// # Arguments
///
/// * `verbose` - Enable debug output for dualpack crates
/// * `quiet` - Only show errors
/// * `no_color` - Disable ANSI colors regardless of the terminal
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// ANSI output follows [`ui::should_use_color`] unless `no_color` is set.
///
/// # Examples
///
/// ```no_run
/// use dualpack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("dualpack_config=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && ui::should_use_color())
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
