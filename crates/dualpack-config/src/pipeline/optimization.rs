use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::project::ProjectInputs;

pub const RUNTIME_GROUP: &str = "framework-runtime";
pub const VENDOR_GROUP: &str = "vendors";

/// Which chunks a cache group may pull modules out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    #[default]
    All,
}

/// Membership test over a module's origin path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginTest {
    /// Origin must contain this fragment
    pub contains: String,
    /// ...and must not contain any of these
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

impl OriginTest {
    pub fn contains(fragment: impl Into<String>) -> Self {
        Self {
            contains: fragment.into(),
            excludes: Vec::new(),
        }
    }

    pub fn excluding(mut self, fragment: impl Into<String>) -> Self {
        self.excludes.push(fragment.into());
        self
    }

    pub fn matches(&self, origin: &str) -> bool {
        let origin = origin.replace('\\', "/");
        origin.contains(&self.contains) && !self.excludes.iter().any(|ex| origin.contains(ex))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    pub name: String,
    pub test: OriginTest,
    pub chunks: ChunkScope,
    /// Higher priority is tried first by the engine; mirrors list order.
    pub priority: i32,
}

/// Code splitting and minification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    pub cache_groups: Vec<CacheGroup>,
    pub minimize: bool,
}

impl OptimizationPolicy {
    /// Groups are matched in the given order; names must be unique.
    pub fn new(cache_groups: Vec<CacheGroup>, minimize: bool) -> Result<Self> {
        let mut seen = HashSet::new();
        for group in &cache_groups {
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateCacheGroup(group.name.clone()));
            }
        }
        Ok(Self {
            cache_groups,
            minimize,
        })
    }

    /// Group a module ends up in. `None` means it stays in its entry chunk.
    pub fn group_for(&self, origin: &str) -> Option<&CacheGroup> {
        self.cache_groups.iter().find(|group| group.test.matches(origin))
    }

    pub fn group(&self, name: &str) -> Option<&CacheGroup> {
        self.cache_groups.iter().find(|group| group.name == name)
    }
}

/// Cache groups shared by both modes.
pub fn cache_groups(inputs: &ProjectInputs) -> Vec<CacheGroup> {
    vec![
        CacheGroup {
            name: RUNTIME_GROUP.to_string(),
            test: OriginTest::contains(&inputs.runtime_marker),
            chunks: ChunkScope::All,
            priority: 20,
        },
        CacheGroup {
            name: VENDOR_GROUP.to_string(),
            test: OriginTest::contains(&inputs.vendor_marker).excluding(&inputs.runtime_marker),
            chunks: ChunkScope::All,
            priority: 10,
        },
    ]
}

/// Derive the optimization policy for `mode`.
pub fn optimization(mode: BuildMode, inputs: &ProjectInputs) -> Result<OptimizationPolicy> {
    OptimizationPolicy::new(cache_groups(inputs), mode.is_production())
}
