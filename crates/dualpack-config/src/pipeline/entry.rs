use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;
use crate::project::ProjectInputs;

/// Entry name used while iterating on the app.
pub const DEVELOPMENT_ENTRY: &str = "app";

/// Entry name of the packaged demo artifact.
pub const PRODUCTION_ENTRY: &str = "demo";

/// Named entry points, each feeding an ordered list of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrySet(IndexMap<String, Vec<String>>);

impl EntrySet {
    pub fn single(name: impl Into<String>, modules: Vec<String>) -> Self {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(name.into(), modules);
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Entry name for `mode`. The module list never depends on it.
pub fn entry_name(mode: BuildMode) -> &'static str {
    match mode {
        BuildMode::Development => DEVELOPMENT_ENTRY,
        BuildMode::Production => PRODUCTION_ENTRY,
    }
}

/// Modules feeding the single entry: polyfill first, then the app.
pub fn entry_modules(inputs: &ProjectInputs) -> Vec<String> {
    vec![inputs.polyfill.clone(), inputs.app_module_specifier()]
}

/// Resolve the entry set for `mode`.
///
/// # Example
///
/// ```
/// use dualpack_config::{resolve_entries, BuildMode, ProjectInputs};
///
/// let entries = resolve_entries(BuildMode::Production, &ProjectInputs::default());
/// assert_eq!(
///     entries.get("demo").unwrap(),
///     ["@babel/polyfill", "./src/app.fsproj"]
/// );
/// ```
pub fn resolve_entries(mode: BuildMode, inputs: &ProjectInputs) -> EntrySet {
    EntrySet::single(entry_name(mode), entry_modules(inputs))
}
