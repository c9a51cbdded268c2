//! Processing stage sequence for a variant.
//!
//! Stage order is significant and fixed:
//!
//! ```text
//! resolve -> commonjs -> transform -> replace -> sourcemaps [-> minify]
//! ```
//!
//! The minify stage is only appended for production variants.

use std::collections::BTreeMap;

use prism_config::PrismConfig;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::VariantId;
use crate::error::Result;
use crate::external::ExternalPredicate;
use crate::transform::TransformConfig;

/// Token substituted with the variant's environment mode
pub const NODE_ENV_TOKEN: &str = "process.env.NODE_ENV";

/// A single processing stage with its options payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", content = "options", rename_all = "kebab-case")]
pub enum Stage {
    Resolve(ResolveOptions),
    #[serde(rename = "commonjs")]
    CommonJs(CommonJsOptions),
    Transform(TransformConfig),
    Replace(ReplaceOptions),
    #[serde(rename = "sourcemaps")]
    SourceMaps,
    Minify(MinifyOptions),
}

/// Stage tags in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StageKind {
    Resolve,
    CommonJs,
    Transform,
    Replace,
    SourceMaps,
    Minify,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Resolve(_) => StageKind::Resolve,
            Stage::CommonJs(_) => StageKind::CommonJs,
            Stage::Transform(_) => StageKind::Transform,
            Stage::Replace(_) => StageKind::Replace,
            Stage::SourceMaps => StageKind::SourceMaps,
            Stage::Minify(_) => StageKind::Minify,
        }
    }
}

/// Resolves bare imports against installed packages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    pub main_fields: Vec<String>,
    /// Externalized names the resolver never needs to look up
    pub skip: Vec<String>,
}

/// Converts CommonJS modules from `node_modules` into ES modules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonJsOptions {
    pub include: String,
    /// Exports the interop shim cannot detect on its own, keyed by file
    pub named_exports: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReplaceOptions {
    /// Token to JavaScript source literal
    pub values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinifyOptions {
    pub sourcemap: bool,
    pub output: MinifyOutput,
    pub compress: CompressOptions,
    pub warnings: bool,
    /// Output syntax level
    pub ecma: u16,
    /// Keep top-level names as-is
    pub toplevel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinifyOutput {
    pub comments: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressOptions {
    pub keep_infinity: bool,
    /// Property reads are assumed free of side effects
    pub pure_getters: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            sourcemap: true,
            output: MinifyOutput { comments: false },
            compress: CompressOptions {
                keep_infinity: true,
                pure_getters: true,
            },
            warnings: true,
            ecma: 5,
            toplevel: false,
        }
    }
}

/// Assemble the ordered stage list for a variant.
///
/// # Errors
///
/// Fails when `transform` was not built for `variant` or is otherwise
/// malformed. The error only concerns this variant.
pub fn build_stages(
    variant: VariantId,
    external: &ExternalPredicate,
    transform: TransformConfig,
    config: &PrismConfig,
) -> Result<Vec<Stage>> {
    transform.validate(variant)?;

    let mut stages = vec![
        Stage::Resolve(ResolveOptions {
            main_fields: vec!["module".to_string(), "main".to_string()],
            skip: external.names().map(String::from).collect(),
        }),
        Stage::CommonJs(commonjs_options(config)),
        Stage::Transform(transform),
        Stage::Replace(ReplaceOptions {
            values: BTreeMap::from([(
                NODE_ENV_TOKEN.to_string(),
                Value::String(variant.mode().to_string()).to_string(),
            )]),
        }),
        Stage::SourceMaps,
    ];

    if variant.is_production() {
        stages.push(Stage::Minify(MinifyOptions::default()));
    }

    tracing::debug!(variant = %variant, stages = stages.len(), "built processing stages");

    Ok(stages)
}

fn commonjs_options(config: &PrismConfig) -> CommonJsOptions {
    let mut named_exports = BTreeMap::new();
    if !config.validation.named_exports.is_empty() {
        named_exports.insert(
            format!("node_modules/{}/index.js", config.validation.package),
            config.validation.named_exports.clone(),
        );
    }

    CommonJsOptions {
        include: "node_modules/**".to_string(),
        named_exports,
    }
}
