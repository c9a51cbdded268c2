//! Dependency manifest read from `package.json`.
//!
//! Only the fields the variant policies need are kept: the top-level
//! dependency names and the `module` output path. Version ranges are
//! discarded; transitive dependencies are never looked at.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Raw `package.json` shape. Dependency tables map names to version ranges.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    module: Option<String>,

    #[serde(default)]
    peer_dependencies: Option<IndexMap<String, Value>>,

    #[serde(default)]
    dependencies: Option<IndexMap<String, Value>>,
}

/// Immutable view of the package manifest consumed by every policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    /// Package name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path of the ES module build, taken verbatim from the `module` field
    pub module: String,

    /// Names the consuming application must supply
    #[serde(default)]
    pub peer_dependencies: BTreeSet<String>,

    /// Names this library itself depends on
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
}

impl DependencyManifest {
    /// Create a manifest with only the `module` path set.
    ///
    /// # Example
    ///
    /// ```
    /// use prism_config::DependencyManifest;
    ///
    /// let manifest = DependencyManifest::new("dist/lib.esm.js")
    ///     .with_peer_dependencies(["react"])
    ///     .with_dependencies(["classnames"]);
    ///
    /// assert!(manifest.peer_dependencies.contains("react"));
    /// assert_eq!(manifest.module, "dist/lib.esm.js");
    /// ```
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            name: None,
            module: module.into(),
            peer_dependencies: BTreeSet::new(),
            dependencies: BTreeSet::new(),
        }
    }

    pub fn with_peer_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.peer_dependencies.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(names.into_iter().map(Into::into));
        self
    }

    /// Read and parse a `package.json` file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ManifestNotFound` if the file does not exist
    /// - `ConfigError::ManifestParse` on invalid JSON
    /// - `ConfigError::MissingField` if `module` is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::ManifestNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let manifest = Self::from_value(value).map_err(|err| match err {
            ConfigError::ManifestParse { message, .. } => ConfigError::ManifestParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            peers = manifest.peer_dependencies.len(),
            dependencies = manifest.dependencies.len(),
            "loaded package manifest"
        );

        Ok(manifest)
    }

    /// Build a manifest from an already parsed `package.json` value.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: PackageJson =
            serde_json::from_value(value).map_err(|e| ConfigError::ManifestParse {
                path: "package.json".into(),
                message: e.to_string(),
            })?;

        let module = raw
            .module
            .filter(|module| !module.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "module".to_string(),
                hint: Some(
                    "Add a \"module\" field pointing at the ES module build, e.g. \"dist/index.esm.js\""
                        .to_string(),
                ),
            })?;

        Ok(Self {
            name: raw.name,
            module,
            peer_dependencies: names(raw.peer_dependencies),
            dependencies: names(raw.dependencies),
        })
    }
}

impl std::str::FromStr for DependencyManifest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| ConfigError::ManifestParse {
            path: "package.json".into(),
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }
}

fn names(table: Option<IndexMap<String, Value>>) -> BTreeSet<String> {
    table
        .map(|table| table.into_keys().collect())
        .unwrap_or_default()
}
