//! Miette diagnostic conversion for CLI errors.

use miette::{MietteDiagnostic, Report};
use prism_config::ConfigError;

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report, carrying its hint as help
/// text and a stable diagnostic code.
pub fn cli_error_to_miette(err: CliError) -> Report {
    let code = diagnostic_code(&err);
    let mut diagnostic = MietteDiagnostic::new(err.to_string()).with_code(code);
    if let Some(hint) = err.hint() {
        diagnostic = diagnostic.with_help(hint);
    }
    Report::new(diagnostic)
}

fn diagnostic_code(err: &CliError) -> &'static str {
    match err {
        CliError::Config(config) if config.is_manifest_error() => "prism::manifest",
        CliError::Config(ConfigError::SchemaValidation { .. }) => "prism::config::schema",
        CliError::Config(_) => "prism::config",
        CliError::VariantsFailed { .. } => "prism::variant",
        CliError::InvalidArgument(_) => "prism::argument",
        CliError::FileNotFound(_) | CliError::Io(_) => "prism::io",
        CliError::Json(_) => "prism::json",
    }
}
