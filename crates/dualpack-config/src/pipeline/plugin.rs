use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::project::ProjectInputs;

/// A post-processing step run by the bundler engine after chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PluginStep {
    /// Collect extracted styles into one stylesheet in the output directory
    ExtractStyles { filename: String },
    /// Materialize the page from a template, wiring in emitted assets
    EmitHtml { template: PathBuf, filename: PathBuf },
}

impl PluginStep {
    pub fn kind(&self) -> &'static str {
        match self {
            PluginStep::ExtractStyles { .. } => "extract-styles",
            PluginStep::EmitHtml { .. } => "emit-html",
        }
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, PluginStep::ExtractStyles { .. })
    }

    pub fn is_html_emission(&self) -> bool {
        matches!(self, PluginStep::EmitHtml { .. })
    }
}

/// Ordered plugin steps. Style extraction, when present, precedes HTML
/// emission so the page can link the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginList(Vec<PluginStep>);

impl PluginList {
    pub fn new(steps: Vec<PluginStep>) -> Result<Self> {
        for (index, step) in steps.iter().enumerate() {
            if steps[..index].iter().any(|s| s.kind() == step.kind()) {
                return Err(ConfigError::DuplicatePlugin(step.kind().to_string()));
            }
        }

        let list = Self(steps);
        if let (Some(extraction), Some(emission)) = (list.extraction_index(), list.html_index()) {
            if extraction >= emission {
                return Err(ConfigError::PluginOrder {
                    extraction,
                    emission,
                });
            }
        }
        Ok(list)
    }

    pub fn extraction_index(&self) -> Option<usize> {
        self.0.iter().position(PluginStep::is_extraction)
    }

    pub fn html_index(&self) -> Option<usize> {
        self.0.iter().position(PluginStep::is_html_emission)
    }

    pub fn steps(&self) -> &[PluginStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compose the plugin list for `mode`.
pub fn compose_plugins(mode: BuildMode, inputs: &ProjectInputs) -> Result<PluginList> {
    let emit_html = PluginStep::EmitHtml {
        template: inputs.template_path(),
        filename: inputs.html_output_path(),
    };

    let steps = match mode {
        BuildMode::Production => vec![
            PluginStep::ExtractStyles {
                filename: inputs.stylesheet.clone(),
            },
            emit_html,
        ],
        BuildMode::Development => vec![emit_html],
    };

    PluginList::new(steps)
}
