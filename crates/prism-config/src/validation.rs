//! Pluggable config validation strategies
//!
//! Schema checks only. Variant ids used as override keys are checked by the
//! assembler, which owns the catalog.

use crate::config::PrismConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &PrismConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use prism_config::{ConfigValidator, PrismConfig, SchemaValidator};
///
/// SchemaValidator.validate(&PrismConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &PrismConfig) -> Result<()> {
        if config.library.file_stem.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "library.file_stem cannot be empty".to_string(),
                hint: Some("Set file_stem to the bundle file name, e.g. \"react-svg\"".to_string()),
            });
        }

        if config.library.file_stem.contains('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "library.file_stem '{}' must not contain a path separator",
                    config.library.file_stem
                ),
                hint: Some("Use library.out_dir to choose the output directory".to_string()),
            });
        }

        is_identifier(&config.library.global_name).map_err(|message| {
            ConfigError::SchemaValidation {
                message: format!("library.global_name: {}", message),
                hint: Some("The universal build assigns its exports to this global".to_string()),
            }
        })?;

        if config.validation.package.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "validation.package cannot be empty".to_string(),
                hint: Some("Name the prop validation package, e.g. \"prop-types\"".to_string()),
            });
        }

        is_identifier(&config.validation.global).map_err(|message| {
            ConfigError::SchemaValidation {
                message: format!("validation.global: {}", message),
                hint: None,
            }
        })?;

        for (package, global) in &config.globals {
            if package.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "globals keys cannot be empty".to_string(),
                    hint: Some("Remove empty package names from the 'globals' table".to_string()),
                });
            }
            is_identifier(global).map_err(|message| ConfigError::SchemaValidation {
                message: format!("globals.\"{}\": {}", package, message),
                hint: None,
            })?;
        }

        Ok(())
    }
}

/// Check that a name is a valid JavaScript identifier.
///
/// Valid: MyLibrary, _internal, $jquery, lib123
/// Invalid: 123abc, my-lib, my.lib, ""
pub fn is_identifier(name: &str) -> std::result::Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("global name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "global name must start with a letter, underscore, or dollar sign: '{}'",
            name
        ));
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "global name can only contain letters, numbers, underscores, or dollar signs: '{}'",
            name
        ));
    }

    Ok(())
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &PrismConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&PrismConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_stem() {
        let mut config = PrismConfig::default();
        config.library.file_stem = "  ".to_string();
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_stem_with_separator() {
        let mut config = PrismConfig::default();
        config.library.file_stem = "lib/index".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_invalid_global_name() {
        let mut config = PrismConfig::default();
        config.library.global_name = "react-svg".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_invalid_runtime_global() {
        let mut config = PrismConfig::default();
        config
            .globals
            .insert("react-dom".to_string(), "React DOM".to_string());
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("ReactSVG").is_ok());
        assert!(is_identifier("_internal").is_ok());
        assert!(is_identifier("$jquery").is_ok());
        assert!(is_identifier("").is_err());
        assert!(is_identifier("123abc").is_err());
        assert!(is_identifier("my.lib").is_err());
    }
}
