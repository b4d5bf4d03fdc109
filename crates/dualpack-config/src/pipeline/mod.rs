//! Per-component derivations of the build descriptor.
//!
//! Each submodule is a pure function of the [`BuildMode`](crate::BuildMode)
//! and the shared [`ProjectInputs`](crate::ProjectInputs). None of them reads
//! another's output; [`BuildDescriptor`](crate::BuildDescriptor) merges them.

mod entry;
mod loader;
mod optimization;
mod output;
mod plugin;

pub use entry::{
    entry_modules, entry_name, resolve_entries, EntrySet, DEVELOPMENT_ENTRY, PRODUCTION_ENTRY,
};
pub use loader::{
    loader_rules, style_chain, Concern, LoaderRule, LoaderRuleSet, Transform,
    COMPILED_SOURCE_EXTENSIONS, STATIC_ASSET_EXTENSIONS, STYLE_EXTENSIONS,
};
pub use optimization::{
    cache_groups, optimization, CacheGroup, ChunkScope, OptimizationPolicy, OriginTest,
    RUNTIME_GROUP, VENDOR_GROUP,
};
pub use output::{
    output_spec, FilenameTemplate, OutputSpec, SourceMapMode, CONTENT_HASH_PLACEHOLDER,
    EXT_PLACEHOLDER, NAME_PLACEHOLDER,
};
pub use plugin::{compose_plugins, PluginList, PluginStep};
