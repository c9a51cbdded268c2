//! Error types for manifest and configuration loading.
//!
//! Every variant here is fatal for an assembly run: without a readable
//! manifest no variant can decide what to externalize.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Manifest errors
    #[error("package manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to parse package manifest {}: {message}", .path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("package manifest is missing required field '{field}'")]
    MissingField { field: String, hint: Option<String> },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'")]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::MissingField { hint, .. }
            | ConfigError::InvalidValue { hint, .. }
            | ConfigError::SchemaValidation { hint, .. } => hint.as_deref(),
            ConfigError::ManifestNotFound(_) => {
                Some("Run prism from the package root or pass --manifest <path>")
            }
            _ => None,
        }
    }

    /// True for errors raised while reading the dependency manifest.
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ManifestNotFound(_)
                | ConfigError::ManifestParse { .. }
                | ConfigError::MissingField { .. }
        )
    }
}
