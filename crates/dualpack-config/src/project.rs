//! Static project inputs and their layered loading.
//!
//! Every derivation reads the same [`ProjectInputs`]; only the build mode
//! differs between the two pipelines. Values are layered as
//! defaults → `dualpack.toml` → `DUALPACK_*` environment variables, and the
//! CLI merges its own flags on top.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Conventional config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "dualpack.toml";

/// Prefix for environment overrides (`DUALPACK_DEV_PORT=9000`).
pub const ENV_PREFIX: &str = "DUALPACK_";

/// Keys accepted from `DUALPACK_*` variables. Unrelated variables sharing
/// the prefix are ignored instead of tripping `deny_unknown_fields`.
const ENV_KEYS: [&str; 10] = [
    "source_root",
    "app_module",
    "polyfill",
    "html_template",
    "html_output",
    "output_dir",
    "stylesheet",
    "runtime_marker",
    "vendor_marker",
    "dev_port",
];

/// Inputs shared by both build modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProjectInputs {
    /// Directory all source inputs are resolved against
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Compiled-language project file, relative to `source_root`
    #[serde(default = "default_app_module")]
    pub app_module: String,

    /// Polyfill module loaded ahead of the app module
    #[serde(default = "default_polyfill")]
    pub polyfill: String,

    /// HTML template, relative to `source_root`
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,

    /// Emitted HTML page, relative to `output_dir`
    #[serde(default = "default_html_output")]
    pub html_output: PathBuf,

    /// Directory the bundler writes into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the stylesheet extracted in production
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Path fragment identifying the compiled language's support runtime
    #[serde(default = "default_runtime_marker")]
    pub runtime_marker: String,

    /// Path fragment identifying third-party dependency modules
    #[serde(default = "default_vendor_marker")]
    pub vendor_marker: String,

    /// Port of the development server
    #[serde(default = "default_dev_port")]
    pub dev_port: u16,
}

impl Default for ProjectInputs {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            app_module: default_app_module(),
            polyfill: default_polyfill(),
            html_template: default_html_template(),
            html_output: default_html_output(),
            output_dir: default_output_dir(),
            stylesheet: default_stylesheet(),
            runtime_marker: default_runtime_marker(),
            vendor_marker: default_vendor_marker(),
            dev_port: default_dev_port(),
        }
    }
}

impl ProjectInputs {
    /// Load inputs for the project rooted at `root`.
    ///
    /// With `config_path` set, that file must exist. Without it,
    /// `root/dualpack.toml` is used when present and skipped otherwise.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dualpack_config::ProjectInputs;
    ///
    /// let inputs = ProjectInputs::load(".", None).unwrap();
    /// assert_eq!(inputs.polyfill, "@babel/polyfill");
    /// ```
    pub fn load(root: impl AsRef<Path>, config_path: Option<&Path>) -> Result<Self> {
        Self::figment(root, config_path)?
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: "configuration".to_string(),
                hint: Some(e.to_string()),
            })
    }

    /// Layered sources without extraction, so callers can merge more on top.
    pub fn figment(root: impl AsRef<Path>, config_path: Option<&Path>) -> Result<Figment> {
        let root = root.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    root.join(path)
                };
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Some(path)
            }
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            tracing::debug!("Loading project config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS)))
    }

    /// Module specifier the bundler resolves for the app entry
    /// (`./src/app.fsproj` for the default layout).
    pub fn app_module_specifier(&self) -> String {
        let joined = self.source_root.join(&self.app_module);
        let normalized = joined.to_string_lossy().replace('\\', "/");
        if joined.is_absolute()
            || normalized.starts_with("./")
            || normalized.starts_with('/')
            || has_drive_prefix(&normalized)
        {
            normalized
        } else {
            format!("./{normalized}")
        }
    }

    /// Template path relative to the project root.
    pub fn template_path(&self) -> PathBuf {
        self.source_root.join(&self.html_template)
    }

    /// Emitted page path relative to the project root.
    pub fn html_output_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_output)
    }

    /// JSON schema for `dualpack.toml`.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ProjectInputs);
        serde_json::to_value(schema).unwrap_or_default()
    }
}

/// `C:/...`: a Windows absolute path, whatever the host platform.
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_app_module() -> String {
    "app.fsproj".to_string()
}

fn default_polyfill() -> String {
    "@babel/polyfill".to_string()
}

fn default_html_template() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_html_output() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_stylesheet() -> String {
    "styles.css".to_string()
}

fn default_runtime_marker() -> String {
    "fable-library".to_string()
}

fn default_vendor_marker() -> String {
    "node_modules".to_string()
}

fn default_dev_port() -> u16 {
    8090
}
