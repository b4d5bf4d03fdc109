//! Terminal output for dualpack commands.
//!
//! Status lines and summaries go to stderr; stdout is reserved for the
//! descriptor JSON and the schema.
//!
//! ```no_run
//! use dualpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking project...");
//! ui::success("Project is valid");
//! ```

mod format;
mod messages;

pub use format::{component_lines, format_chain, print_descriptor_summary};
pub use messages::{error, info, success, warning};

/// Check if running in a CI environment.
///
/// Detects the variables set by GitHub Actions, GitLab CI, CircleCI and
/// Travis CI, plus the generic `CI`.
///
/// # Returns
///
/// `true` if running in CI
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// The single color decision for the CLI: status messages and the tracing
/// subscriber both ask here.
///
/// 1. `NO_COLOR` disables colors
/// 2. `FORCE_COLOR` enables them, even outside a terminal
/// 3. CI logs stay plain
/// 4. Otherwise colors follow whether stderr is attended by a user
///
/// # Returns
///
/// `true` if colors should be used
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    !is_ci() && console::user_attended_stderr()
}

/// Apply the color decision to owo-colors' global override.
///
/// Call once in `main`, after parsing arguments.
///
/// # Arguments
///
/// * `no_color` - The `--no-color` flag; wins over the environment
///
/// # Examples
///
/// ```no_run
/// use dualpack_cli::ui;
///
/// ui::init_colors(false);
/// ui::success("Colors follow the terminal");
/// ```
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
