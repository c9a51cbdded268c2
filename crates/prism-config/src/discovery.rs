//! File-based config discovery for CLI use
//!
//! Handles finding and loading prism configuration from the filesystem and
//! the environment. Sources are layered with figment, later ones winning:
//!
//! 1. built-in defaults
//! 2. `prism.toml`, or the `prism` field of `package.json`
//! 3. `PRISM_*` environment variables (`__` separates nested keys)

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::{LibraryOptions, PrismConfig, ValidationLibrary};
use crate::error::{ConfigError, Result};
use crate::settings::GlobalSettings;

const CONFIG_FILE: &str = "prism.toml";
const PACKAGE_JSON: &str = "package.json";
const ENV_PREFIX: &str = "PRISM_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use prism_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: prism.toml
    /// 2. package.json (prism field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("prism").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<PrismConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config from the discovered file, falling back to defaults
    /// (still layered with the environment) when there is none.
    pub fn load_or_default(&self) -> Result<PrismConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no prism config found, using defaults");
                extract(base_figment())
            }
        }
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<PrismConfig> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(format!("Config file does not exist: {}", path.display())),
            });
        }

        let figment = if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            let value = self.package_json_section(path)?;
            base_figment().merge(Serialized::defaults(value))
        } else {
            let content = fs::read_to_string(path)?;
            // Surface TOML syntax errors with the parser's message
            toml::from_str::<toml::Value>(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;
            base_figment().merge(Toml::string(&content))
        };

        tracing::debug!(path = %path.display(), "loading prism config");
        extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn package_json_section(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        match parsed.get("prism") {
            Some(Value::Null) | None => Err(ConfigError::InvalidValue {
                field: "prism".to_string(),
                hint: Some("Add a 'prism' object to your package.json".to_string()),
            }),
            Some(section) => Ok(section.clone()),
        }
    }
}

/// Defaults layer. `globals` and `variants` are left out so a configured
/// table replaces them instead of being merged key by key; serde defaults
/// fill them when no source sets them.
#[derive(Serialize)]
struct DefaultsLayer {
    library: LibraryOptions,
    validation: ValidationLibrary,
    settings: GlobalSettings,
}

fn base_figment() -> Figment {
    Figment::new().merge(Serialized::defaults(DefaultsLayer {
        library: LibraryOptions::default(),
        validation: ValidationLibrary::default(),
        settings: GlobalSettings::default(),
    }))
}

fn extract(figment: Figment) -> Result<PrismConfig> {
    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: Some(e.to_string()),
    })
}
