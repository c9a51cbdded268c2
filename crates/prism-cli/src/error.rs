//! Error handling for the prism CLI.
//!
//! Config and manifest errors from `prism-config` convert into
//! [`CliError`] through `#[from]`; [`ResultExt`] attaches paths to I/O errors.
//! At the binary boundary errors become miette reports.
//!
//! # Example
//!
//! ```rust,no_run
//! use prism_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_manifest(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;

use prism_config::ConfigError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest or configuration could not be loaded or is invalid
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Some variants failed; the rest were emitted
    #[error("{failed} of {total} variants failed to assemble")]
    VariantsFailed { failed: usize, total: usize },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Suggested fix shown under the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Config(err) => err.hint().map(String::from),
            CliError::VariantsFailed { .. } => Some(
                "Check the [variants.<id>] plugin overrides in your prism config".to_string(),
            ),
            CliError::FileNotFound(_) => {
                Some("Check the path, or run prism from the package root".to_string())
            }
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
