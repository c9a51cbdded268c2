//! Source transform (Babel) configuration policy.

use std::collections::HashSet;

use prism_config::{PluginSpec, PrismConfig};
use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::VariantId;
use crate::error::{Result, VariantError};

pub const RUNTIME_PLUGIN: &str = "@babel/transform-runtime";
pub const PROP_TYPES_PLUGIN: &str = "transform-react-remove-prop-types";
pub const ENV_PRESET: &str = "@babel/env";
pub const REACT_PRESET: &str = "@babel/react";

/// How validation (prop-types) declarations are treated.
///
/// Exactly one mode applies per variant, so the wrap and strip plugins can
/// never be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropTypesMode {
    /// Declarations stay intact and active
    Preserve,
    /// Declarations are wrapped in an environment check so consumers can still
    /// opt in, while their optimized builds drop the wrapper
    Wrap,
    /// Declarations and their import are removed
    Strip,
}

impl PropTypesMode {
    pub fn for_variant(variant: VariantId) -> Self {
        match variant {
            VariantId::Esm => PropTypesMode::Wrap,
            VariantId::CjsProduction | VariantId::UmdProduction => PropTypesMode::Strip,
            VariantId::CjsDevelopment | VariantId::UmdDevelopment => PropTypesMode::Preserve,
        }
    }

    /// The plugin implementing this mode, if any
    pub fn plugin(self) -> Option<PluginSpec> {
        match self {
            PropTypesMode::Preserve => None,
            PropTypesMode::Wrap => Some(PluginSpec::with_options(
                PROP_TYPES_PLUGIN,
                json!({ "mode": "wrap" }),
            )),
            PropTypesMode::Strip => Some(PluginSpec::with_options(
                PROP_TYPES_PLUGIN,
                json!({ "removeImport": true }),
            )),
        }
    }
}

/// Options shared by every variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTransformOptions {
    /// Never pick up `.babelrc` files from the source tree
    pub babelrc: bool,
    pub exclude: Vec<String>,
    pub presets: Vec<PluginSpec>,
    /// Helpers are imported from the runtime package instead of inlined
    pub runtime_helpers: bool,
}

impl Default for BaseTransformOptions {
    fn default() -> Self {
        Self {
            babelrc: false,
            exclude: vec!["node_modules/**".to_string()],
            presets: vec![
                // Module syntax is left to the bundler
                PluginSpec::with_options(ENV_PRESET, json!({ "loose": true, "modules": false })),
                PluginSpec::new(REACT_PRESET),
            ],
            runtime_helpers: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    #[serde(flatten)]
    pub base: BaseTransformOptions,

    /// Ordered plugin list: the runtime plugin, the prop-types plugin for the
    /// variant's mode, then configured extras
    pub plugins: Vec<PluginSpec>,

    /// Derived from the variant; not a transformer option
    #[serde(skip)]
    pub prop_types: PropTypesMode,

    #[serde(skip)]
    pub production: bool,
}

impl TransformConfig {
    /// Plugin by name
    pub fn plugin(&self, name: &str) -> Option<&PluginSpec> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugin(name).is_some()
    }

    /// Reject configs the transformer would choke on or that break the
    /// mode invariants of `variant`.
    pub fn validate(&self, variant: VariantId) -> Result<()> {
        if self.production != variant.is_production() {
            return Err(VariantError::MalformedTransform {
                variant,
                message: format!(
                    "production flag is {} but {} is a {} variant",
                    self.production,
                    variant,
                    variant.mode()
                ),
            });
        }

        if self.prop_types != PropTypesMode::for_variant(variant) {
            return Err(VariantError::MalformedTransform {
                variant,
                message: format!("prop-types mode {:?} does not apply to {}", self.prop_types, variant),
            });
        }

        let mut seen = HashSet::new();
        for plugin in self.base.presets.iter().chain(&self.plugins) {
            if plugin.name.trim().is_empty() {
                return Err(VariantError::InvalidPlugin {
                    variant,
                    message: "plugin name cannot be empty".to_string(),
                });
            }
            if !matches!(plugin.options, Value::Null | Value::Object(_)) {
                return Err(VariantError::InvalidPlugin {
                    variant,
                    message: format!("options for '{}' must be an object", plugin.name),
                });
            }
            if !seen.insert(plugin.name.as_str()) {
                return Err(VariantError::InvalidPlugin {
                    variant,
                    message: format!("plugin '{}' is listed more than once", plugin.name),
                });
            }
        }

        let expected = self.prop_types.plugin();
        let actual = self.plugin(PROP_TYPES_PLUGIN);
        if expected.as_ref() != actual {
            return Err(VariantError::ConflictingPlugins {
                variant,
                message: format!(
                    "'{}' must match the {:?} prop-types mode of this variant",
                    PROP_TYPES_PLUGIN, self.prop_types
                ),
            });
        }

        Ok(())
    }
}

/// Transform config for a variant, including any configured extra plugins.
///
/// # Errors
///
/// Returns a [`VariantError`] when a configured plugin for this variant is
/// malformed or touches the prop-types plugin.
pub fn transform_config_for(variant: VariantId, config: &PrismConfig) -> Result<TransformConfig> {
    let prop_types = PropTypesMode::for_variant(variant);

    let mut plugins = vec![PluginSpec::new(RUNTIME_PLUGIN)];
    plugins.extend(prop_types.plugin());

    if let Some(overrides) = config.overrides_for(variant.as_str()) {
        if overrides
            .plugins
            .iter()
            .any(|plugin| plugin.name == PROP_TYPES_PLUGIN)
        {
            return Err(VariantError::ConflictingPlugins {
                variant,
                message: format!(
                    "'{}' is managed per variant and cannot be configured",
                    PROP_TYPES_PLUGIN
                ),
            });
        }
        plugins.extend(overrides.plugins.iter().cloned());
    }

    let transform = TransformConfig {
        base: BaseTransformOptions::default(),
        plugins,
        prop_types,
        production: variant.is_production(),
    };
    transform.validate(variant)?;

    tracing::debug!(
        variant = %variant,
        plugins = transform.plugins.len(),
        prop_types = ?prop_types,
        "derived transform config"
    );

    Ok(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_config::VariantOverrides;

    fn wraps(transform: &TransformConfig) -> bool {
        transform
            .plugin(PROP_TYPES_PLUGIN)
            .is_some_and(|p| p.options["mode"] == "wrap")
    }

    fn strips(transform: &TransformConfig) -> bool {
        transform
            .plugin(PROP_TYPES_PLUGIN)
            .is_some_and(|p| p.options["removeImport"] == true)
    }

    #[test]
    fn base_options_are_shared() {
        let config = PrismConfig::default();
        for variant in VariantId::all() {
            let transform = transform_config_for(*variant, &config).unwrap();
            assert!(!transform.base.babelrc);
            assert_eq!(transform.base.exclude, ["node_modules/**"]);
            assert_eq!(transform.base.presets[0].name, ENV_PRESET);
            assert_eq!(transform.base.presets[0].options["loose"], true);
            assert_eq!(transform.base.presets[0].options["modules"], false);
            assert_eq!(transform.base.presets[1].name, REACT_PRESET);
            assert!(transform.base.runtime_helpers);
            assert_eq!(transform.plugins[0].name, RUNTIME_PLUGIN);
        }
    }

    #[test]
    fn esm_wraps_validation() {
        let transform = transform_config_for(VariantId::Esm, &PrismConfig::default()).unwrap();
        assert!(wraps(&transform));
        assert!(!strips(&transform));
        assert!(!transform.production);
    }

    #[test]
    fn production_strips_validation() {
        let config = PrismConfig::default();
        for variant in [VariantId::CjsProduction, VariantId::UmdProduction] {
            let transform = transform_config_for(variant, &config).unwrap();
            assert!(strips(&transform), "{variant}");
            assert!(!wraps(&transform), "{variant}");
            assert!(transform.production);
        }
    }

    #[test]
    fn development_keeps_validation() {
        let config = PrismConfig::default();
        for variant in [VariantId::CjsDevelopment, VariantId::UmdDevelopment] {
            let transform = transform_config_for(variant, &config).unwrap();
            assert!(!transform.has_plugin(PROP_TYPES_PLUGIN), "{variant}");
            assert_eq!(transform.plugins.len(), 1);
            assert_eq!(transform.prop_types, PropTypesMode::Preserve);
        }
    }

    #[test]
    fn extra_plugins_are_appended_for_their_variant_only() {
        let mut config = PrismConfig::default();
        config.variants.insert(
            "umd-production".to_string(),
            VariantOverrides {
                plugins: vec![PluginSpec::new("babel-plugin-annotate-pure-calls")],
            },
        );

        let umd = transform_config_for(VariantId::UmdProduction, &config).unwrap();
        assert_eq!(
            umd.plugins.last().map(|p| p.name.as_str()),
            Some("babel-plugin-annotate-pure-calls")
        );

        let cjs = transform_config_for(VariantId::CjsProduction, &config).unwrap();
        assert!(!cjs.has_plugin("babel-plugin-annotate-pure-calls"));
    }

    #[test]
    fn configuring_prop_types_plugin_is_a_conflict() {
        let mut config = PrismConfig::default();
        config.variants.insert(
            "esm".to_string(),
            VariantOverrides {
                plugins: vec![PluginSpec::with_options(
                    PROP_TYPES_PLUGIN,
                    json!({ "removeImport": true }),
                )],
            },
        );

        let err = transform_config_for(VariantId::Esm, &config).unwrap_err();
        assert!(matches!(err, VariantError::ConflictingPlugins { .. }));
        assert_eq!(err.variant(), VariantId::Esm);
    }

    #[test]
    fn malformed_extra_plugins_are_rejected() {
        let mut config = PrismConfig::default();
        config.variants.insert(
            "cjs-development".to_string(),
            VariantOverrides {
                plugins: vec![PluginSpec::with_options("babel-plugin-x", json!(["not", "an", "object"]))],
            },
        );
        assert!(matches!(
            transform_config_for(VariantId::CjsDevelopment, &config),
            Err(VariantError::InvalidPlugin { .. })
        ));

        config.variants.insert(
            "cjs-development".to_string(),
            VariantOverrides {
                plugins: vec![PluginSpec::new(" ")],
            },
        );
        assert!(transform_config_for(VariantId::CjsDevelopment, &config).is_err());

        config.variants.insert(
            "cjs-development".to_string(),
            VariantOverrides {
                plugins: vec![PluginSpec::new(RUNTIME_PLUGIN)],
            },
        );
        assert!(transform_config_for(VariantId::CjsDevelopment, &config).is_err());
    }

    #[test]
    fn validate_rejects_mismatched_production_flag() {
        let mut transform =
            transform_config_for(VariantId::CjsProduction, &PrismConfig::default()).unwrap();
        transform.production = false;
        assert!(matches!(
            transform.validate(VariantId::CjsProduction),
            Err(VariantError::MalformedTransform { .. })
        ));
    }

    #[test]
    fn validate_rejects_combined_modes() {
        let mut transform = transform_config_for(VariantId::Esm, &PrismConfig::default()).unwrap();
        transform.plugins.retain(|p| p.name != PROP_TYPES_PLUGIN);
        transform.plugins.extend(PropTypesMode::Strip.plugin());
        assert!(matches!(
            transform.validate(VariantId::Esm),
            Err(VariantError::ConflictingPlugins { .. })
        ));
    }

    #[test]
    fn serializes_with_babel_option_names() {
        let transform = transform_config_for(VariantId::Esm, &PrismConfig::default()).unwrap();
        let value = serde_json::to_value(&transform).unwrap();
        assert_eq!(value["babelrc"], false);
        assert_eq!(value["runtimeHelpers"], true);
        assert_eq!(value["exclude"], json!(["node_modules/**"]));
        assert_eq!(value["presets"][0]["name"], ENV_PRESET);
        assert_eq!(value["plugins"][1]["options"]["mode"], "wrap");
        assert!(value.get("propTypes").is_none());
        assert!(value.get("production").is_none());
    }
}
