//! Build mode selection.
//!
//! The mode is resolved exactly once, at process start, and then passed by
//! value into every derivation. Nothing else in the crate looks at process
//! arguments.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Short flag that switches a build to production.
pub const PRODUCTION_FLAG: &str = "-p";

/// Long spelling of [`PRODUCTION_FLAG`].
pub const PRODUCTION_FLAG_LONG: &str = "--production";

/// Operating mode of a build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast iteration: stable file names, styles injected at runtime, dev server.
    #[default]
    Development,
    /// Optimized output: hashed file names, extracted styles, minification.
    Production,
}

impl BuildMode {
    /// Every mode, in declaration order. Handy for exhaustive checks.
    pub const ALL: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    /// Resolve the mode from raw invocation arguments.
    ///
    /// Production is selected when `-p` or `--production` appears anywhere in
    /// `args`; its absence is the normal case and yields development.
    ///
    /// # Example
    ///
    /// ```
    /// use dualpack_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::from_args(["dualpack", "-p"]), BuildMode::Production);
    /// assert_eq!(BuildMode::from_args(["dualpack"]), BuildMode::Development);
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let production = args
            .into_iter()
            .any(|arg| matches!(arg.as_ref(), PRODUCTION_FLAG | PRODUCTION_FLAG_LONG));
        Self::from_flag(production)
    }

    /// Resolve the mode from an already parsed production flag.
    pub fn from_flag(production: bool) -> Self {
        let mode = if production {
            BuildMode::Production
        } else {
            BuildMode::Development
        };
        mode.announce();
        mode
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    /// The single status line operators see once per invocation.
    pub fn status_line(self) -> String {
        format!("Bundling for {}...", self.as_str())
    }

    fn announce(self) {
        tracing::info!("{}", self.status_line());
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
