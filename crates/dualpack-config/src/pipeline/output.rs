use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;
use crate::project::ProjectInputs;

/// Placeholder replaced by the chunk or asset name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Placeholder replaced by a digest of the emitted content.
pub const CONTENT_HASH_PLACEHOLDER: &str = "{contentHash}";

/// Placeholder replaced by the original file extension.
pub const EXT_PLACEHOLDER: &str = "{ext}";

/// Output file name pattern understood by the bundler engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a content change is guaranteed to change the file name.
    pub fn has_content_hash(&self) -> bool {
        self.0.contains(CONTENT_HASH_PLACEHOLDER)
    }

    /// Substitute placeholders with concrete values.
    ///
    /// ```
    /// use dualpack_config::FilenameTemplate;
    ///
    /// let template = FilenameTemplate::new("{name}.{contentHash}.js");
    /// assert_eq!(template.render("demo", "3f2a9c"), "demo.3f2a9c.js");
    /// ```
    pub fn render(&self, name: &str, content_hash: &str) -> String {
        self.0
            .replace(NAME_PLACEHOLDER, name)
            .replace(CONTENT_HASH_PLACEHOLDER, content_hash)
    }

    /// Like [`render`](Self::render), also filling in the extension.
    pub fn render_asset(&self, name: &str, content_hash: &str, ext: &str) -> String {
        self.render(name, content_hash).replace(EXT_PLACEHOLDER, ext)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source map generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMapMode {
    /// Separate `.map` files next to each bundle
    #[serde(rename = "source-map")]
    External,
    /// No source maps
    #[serde(rename = "none")]
    None,
}

/// Where and under which names bundles are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub directory: PathBuf,
    pub filename_template: FilenameTemplate,
    /// Always empty: assets are served relative to the host root.
    pub public_path: String,
    /// Name pattern for copied static assets (hashed in both modes)
    pub asset_filename_template: FilenameTemplate,
    pub source_maps: SourceMapMode,
}

/// Derive the output layout for `mode`.
pub fn output_spec(mode: BuildMode, inputs: &ProjectInputs) -> OutputSpec {
    let filename_template = match mode {
        BuildMode::Production => {
            FilenameTemplate::new(format!("{NAME_PLACEHOLDER}.{CONTENT_HASH_PLACEHOLDER}.js"))
        }
        BuildMode::Development => FilenameTemplate::new(format!("{NAME_PLACEHOLDER}.js")),
    };

    let source_maps = match mode {
        BuildMode::Production => SourceMapMode::None,
        BuildMode::Development => SourceMapMode::External,
    };

    OutputSpec {
        directory: inputs.output_dir.clone(),
        filename_template,
        public_path: String::new(),
        asset_filename_template: FilenameTemplate::new(format!(
            "{CONTENT_HASH_PLACEHOLDER}.{EXT_PLACEHOLDER}"
        )),
        source_maps,
    }
}
