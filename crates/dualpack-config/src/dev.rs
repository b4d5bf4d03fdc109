//! Development server descriptor.
//!
//! Only exists in development. In production the descriptor carries no
//! dev server at all, not a disabled one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::BuildMode;
use crate::project::ProjectInputs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerDescriptor {
    pub port: u16,

    /// Rebuilds push a reload to connected pages
    pub live_reload: bool,

    /// Reload client is inlined into the entry bundle
    pub inline: bool,

    /// Directory served at the root URL
    pub content_base: PathBuf,

    /// Path prefix → upstream. Empty by default.
    #[serde(default)]
    pub proxy: IndexMap<String, ProxyRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub target: String,

    #[serde(default)]
    pub change_origin: bool,

    #[serde(default)]
    pub ws: bool,
}

/// Describe the dev server for `mode`; `None` outside development.
pub fn describe_dev_server(mode: BuildMode, inputs: &ProjectInputs) -> Option<DevServerDescriptor> {
    match mode {
        BuildMode::Production => None,
        BuildMode::Development => Some(DevServerDescriptor {
            port: inputs.dev_port,
            live_reload: true,
            inline: true,
            content_base: inputs.output_dir.clone(),
            proxy: IndexMap::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_in_production() {
        assert!(describe_dev_server(BuildMode::Production, &ProjectInputs::default()).is_none());
    }

    #[test]
    fn development_defaults() {
        let dev = describe_dev_server(BuildMode::Development, &ProjectInputs::default())
            .expect("dev server in development");
        assert_eq!(dev.port, 8090);
        assert!(dev.live_reload);
        assert!(dev.inline);
        assert!(dev.proxy.is_empty());
        assert_eq!(dev.content_base, PathBuf::from("build"));
    }

    #[test]
    fn port_follows_inputs() {
        let inputs = ProjectInputs {
            dev_port: 9000,
            ..ProjectInputs::default()
        };
        let dev = describe_dev_server(BuildMode::Development, &inputs).unwrap();
        assert_eq!(dev.port, 9000);
    }
}
