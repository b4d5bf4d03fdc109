//! Status message functions for terminal output.
//!
//! Colors honor the override set by [`init_colors`](super::init_colors).

use owo_colors::{OwoColorize, Stream::Stderr};

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |s| s.green().bold().to_string()),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |s| s.blue().bold().to_string()),
        message
    );
}

/// Print a warning message to stderr.
///
/// ```no_run
/// use dualpack_cli::ui::warning;
///
/// warning("No dualpack.toml found, using defaults");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |s| s.yellow().bold().to_string()),
        message.if_supports_color(Stderr, |s| s.yellow())
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(Stderr, |s| s.red().bold().to_string()),
        message.if_supports_color(Stderr, |s| s.red())
    );
}
