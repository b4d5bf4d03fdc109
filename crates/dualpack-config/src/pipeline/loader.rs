//! Loader rules: which transform chain handles which file.
//!
//! Rules match on the file extension found before any `?query` suffix.
//! Extensions never contain a dot, so two rules whose extension sets are
//! disjoint can never claim the same path. [`LoaderRuleSet::new`] enforces
//! that, which makes lookup order irrelevant.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

pub const COMPILED_SOURCE_EXTENSIONS: &[&str] = &["fs", "fsx", "fsproj"];
pub const STYLE_EXTENSIONS: &[&str] = &["sass", "scss", "css"];
pub const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "woff", "woff2", "ttf", "eot",
];

/// The kind of input a rule is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concern {
    CompiledSource,
    Styling,
    StaticAsset,
}

impl Concern {
    pub fn as_str(self) -> &'static str {
        match self {
            Concern::CompiledSource => "compiled-source",
            Concern::Styling => "styling",
            Concern::StaticAsset => "static-asset",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a loader chain. Chains are listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// External compiler-to-JS toolchain
    CompileToJs,
    /// Sass/SCSS preprocessing
    Sass,
    /// CSS import and url() resolution
    Css,
    /// Inject styles into the page at runtime
    InjectAtRuntime,
    /// Write styles to a separate stylesheet
    ExtractToFile,
    /// Copy the file and reference it by hashed name
    CopyWithHashedReference,
}

impl Transform {
    pub fn as_str(self) -> &'static str {
        match self {
            Transform::CompileToJs => "compile-to-js",
            Transform::Sass => "sass",
            Transform::Css => "css",
            Transform::InjectAtRuntime => "inject-at-runtime",
            Transform::ExtractToFile => "extract-to-file",
            Transform::CopyWithHashedReference => "copy-with-hashed-reference",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file matcher plus the chain that processes matching files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderRule {
    pub concern: Concern,
    /// Regex handed to the bundler engine
    pub test: String,
    pub chain: Vec<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Transform>,
    #[serde(skip)]
    extensions: Vec<String>,
    #[serde(skip)]
    matcher: Regex,
}

impl LoaderRule {
    /// Build a rule for `extensions`. With `accepts_query`, paths such as
    /// `font.woff2?v=4` also match.
    pub fn new(
        concern: Concern,
        extensions: &[&str],
        accepts_query: bool,
        chain: Vec<Transform>,
    ) -> Result<Self> {
        if extensions.is_empty() {
            return Err(ConfigError::EmptyMatcher {
                rule: concern.to_string(),
            });
        }

        for ext in extensions {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("invalid extension '{ext}' in rule '{concern}'"),
                    hint: Some("Use bare extensions like \"css\" without dots".to_string()),
                });
            }
        }

        let alternatives = extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");
        let test = if accepts_query {
            format!(r"^[^?]*\.({alternatives})(\?.*)?$")
        } else {
            format!(r"^[^?]*\.({alternatives})$")
        };
        let matcher = Regex::new(&test)?;

        Ok(Self {
            concern,
            test,
            chain,
            fallback: None,
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            matcher,
        })
    }

    pub fn with_fallback(mut self, fallback: Transform) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Last step of the chain, i.e. what finally happens to the file.
    pub fn terminal(&self) -> Option<Transform> {
        self.chain.last().copied()
    }
}

/// Rules whose matchers partition the asset namespace.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LoaderRuleSet(Vec<LoaderRule>);

impl LoaderRuleSet {
    /// Validate that no two rules can match the same path.
    pub fn new(rules: Vec<LoaderRule>) -> Result<Self> {
        let mut owners: HashMap<&str, Concern> = HashMap::new();
        for rule in &rules {
            for ext in &rule.extensions {
                if let Some(previous) = owners.insert(ext.as_str(), rule.concern) {
                    return Err(ConfigError::OverlappingRules {
                        first: previous.to_string(),
                        second: rule.concern.to_string(),
                        extension: ext.clone(),
                    });
                }
            }
        }
        Ok(Self(rules))
    }

    /// The rule responsible for `path`, if any.
    pub fn rule_for(&self, path: &str) -> Option<&LoaderRule> {
        self.0.iter().find(|rule| rule.matches(path))
    }

    pub fn get(&self, concern: Concern) -> Option<&LoaderRule> {
        self.0.iter().find(|rule| rule.concern == concern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoaderRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Styling chain for `mode`, with the fallback used when extraction is off.
pub fn style_chain(mode: BuildMode) -> (Vec<Transform>, Option<Transform>) {
    match mode {
        BuildMode::Production => (
            vec![Transform::Sass, Transform::Css, Transform::ExtractToFile],
            Some(Transform::InjectAtRuntime),
        ),
        BuildMode::Development => (
            vec![Transform::Sass, Transform::Css, Transform::InjectAtRuntime],
            None,
        ),
    }
}

/// Loader rules for `mode`.
pub fn loader_rules(mode: BuildMode) -> Result<LoaderRuleSet> {
    let compiled = LoaderRule::new(
        Concern::CompiledSource,
        COMPILED_SOURCE_EXTENSIONS,
        false,
        vec![Transform::CompileToJs],
    )?;

    let (chain, fallback) = style_chain(mode);
    let mut styling = LoaderRule::new(Concern::Styling, STYLE_EXTENSIONS, false, chain)?;
    if let Some(fallback) = fallback {
        styling = styling.with_fallback(fallback);
    }

    let assets = LoaderRule::new(
        Concern::StaticAsset,
        STATIC_ASSET_EXTENSIONS,
        true,
        vec![Transform::CopyWithHashedReference],
    )?;

    LoaderRuleSet::new(vec![compiled, styling, assets])
}
