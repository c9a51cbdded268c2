//! High-level configuration structure for prism.
//!
//! Defaults reproduce the stock library build: a `react-svg` bundle exposed as
//! the `ReactSVG` global, with `prop-types` as the validation library and
//! `react` / `react-dom/server` as always-external runtime libraries.
//! For file discovery, see the `discovery` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrismConfig {
    #[serde(default)]
    pub library: LibraryOptions,

    #[serde(default)]
    pub validation: ValidationLibrary,

    /// Always-external runtime libraries and their global identifiers
    #[serde(default = "default_globals")]
    pub globals: IndexMap<String, String>,

    /// Per-variant overrides keyed by variant id (e.g. `umd-production`)
    #[serde(default)]
    pub variants: IndexMap<String, VariantOverrides>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            library: LibraryOptions::default(),
            validation: ValidationLibrary::default(),
            globals: default_globals(),
            variants: IndexMap::new(),
            settings: GlobalSettings::default(),
        }
    }
}

/// Identity of the library being bundled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryOptions {
    /// File stem used for every generated bundle (`<stem>.cjs.production.js`)
    #[serde(default = "default_file_stem")]
    pub file_stem: String,

    /// Global variable the universal build assigns its exports to
    #[serde(default = "default_global_name")]
    pub global_name: String,

    /// Directory the cjs and umd bundles are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            file_stem: default_file_stem(),
            global_name: default_global_name(),
            out_dir: default_out_dir(),
        }
    }
}

/// The runtime prop validation library.
///
/// It is externalized in the development universal build and inlined in the
/// production one, where its declarations are stripped anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLibrary {
    #[serde(default = "default_validation_package")]
    pub package: String,

    #[serde(default = "default_validation_global")]
    pub global: String,

    /// Named exports the interop stage must expose for the package entry
    #[serde(default = "default_named_exports")]
    pub named_exports: Vec<String>,
}

impl Default for ValidationLibrary {
    fn default() -> Self {
        Self {
            package: default_validation_package(),
            global: default_validation_global(),
            named_exports: default_named_exports(),
        }
    }
}

/// Extra settings applied to a single variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantOverrides {
    /// Transform plugins appended after the variant's own plugins
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

/// A transform plugin reference: a plugin name plus its options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginSpec {
    /// Plugin without options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

impl PrismConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use prism_config::PrismConfig;
    /// use serde_json::json;
    ///
    /// let config = PrismConfig::from_value(json!({
    ///     "library": { "file_stem": "icons", "global_name": "Icons" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.library.file_stem, "icons");
    /// assert_eq!(config.validation.package, "prop-types");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Overrides registered for a variant id, if any
    pub fn overrides_for(&self, variant: &str) -> Option<&VariantOverrides> {
        self.variants.get(variant)
    }
}

fn default_file_stem() -> String {
    "react-svg".to_string()
}

fn default_global_name() -> String {
    "ReactSVG".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_validation_package() -> String {
    "prop-types".to_string()
}

fn default_validation_global() -> String {
    "PropTypes".to_string()
}

fn default_named_exports() -> Vec<String> {
    ["bool", "func", "object", "oneOf", "oneOfType", "string"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_globals() -> IndexMap<String, String> {
    IndexMap::from([
        ("react-dom/server".to_string(), "ReactDOMServer".to_string()),
        ("react".to_string(), "React".to_string()),
    ])
}
