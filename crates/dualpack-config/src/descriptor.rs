//! The merged build descriptor handed to the bundler engine.

use serde::Serialize;

use crate::dev::{describe_dev_server, DevServerDescriptor};
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::pipeline::{
    compose_plugins, loader_rules, optimization, output_spec, resolve_entries, EntrySet,
    LoaderRuleSet, OptimizationPolicy, OutputSpec, PluginList,
};
use crate::project::ProjectInputs;

/// Everything the bundler engine needs for one build.
///
/// Built once per invocation by [`BuildDescriptor::derive`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    pub mode: BuildMode,
    pub entries: EntrySet,
    pub output: OutputSpec,
    pub rules: LoaderRuleSet,
    pub optimization: OptimizationPolicy,
    pub plugins: PluginList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerDescriptor>,
}

impl BuildDescriptor {
    /// Derive the descriptor for `mode` from the shared project inputs.
    ///
    /// The built-in derivations satisfy every construction check, so this
    /// only fails if those checks are violated by a code change.
    ///
    /// # Example
    ///
    /// ```
    /// use dualpack_config::{BuildDescriptor, BuildMode, ProjectInputs};
    ///
    /// let descriptor =
    ///     BuildDescriptor::derive(BuildMode::Production, &ProjectInputs::default()).unwrap();
    /// assert!(descriptor.optimization.minimize);
    /// assert!(descriptor.dev_server.is_none());
    /// ```
    pub fn derive(mode: BuildMode, inputs: &ProjectInputs) -> Result<Self> {
        let entries = resolve_entries(mode, inputs);
        let names: Vec<&str> = entries.names().collect();
        tracing::debug!(entries = ?names, "resolved entries");

        let output = output_spec(mode, inputs);
        tracing::debug!(filename = %output.filename_template, "resolved output layout");

        let rules = loader_rules(mode)?;
        tracing::debug!(count = rules.len(), "built loader rules");

        let optimization = optimization(mode, inputs)?;
        tracing::debug!(
            groups = optimization.cache_groups.len(),
            minimize = optimization.minimize,
            "built optimization policy"
        );

        let plugins = compose_plugins(mode, inputs)?;
        tracing::debug!(count = plugins.len(), "composed plugins");

        let dev_server = describe_dev_server(mode, inputs);
        if let Some(dev) = &dev_server {
            tracing::debug!(port = dev.port, "described dev server");
        }

        Ok(Self {
            mode,
            entries,
            output,
            rules,
            optimization,
            plugins,
            dev_server,
        })
    }

    /// Serialize as the JSON document the engine consumes.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
