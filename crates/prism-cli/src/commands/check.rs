//! Check command implementation.
//!
//! Validates the manifest and config, then assembles every variant without
//! emitting anything.

use prism_variants::Assembler;

use crate::cli::CheckArgs;
use crate::commands::utils::{self, Inputs};
use crate::error::{CliError, Result};
use crate::ui::{self, Table};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and parse the manifest
/// 2. Load the config and run schema validation
/// 3. Report override keys that name no variant
/// 4. Assemble every variant and show its externals and output file
///
/// # Errors
///
/// Returns the first manifest/config error, or
/// [`CliError::VariantsFailed`] when any variant does not assemble.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking manifest and configuration...");

    let Inputs { manifest, config } = utils::load_inputs(&args.input)?;
    ui::success(&format!(
        "Manifest {} is valid ({} peer, {} direct dependencies)",
        args.input.manifest.display(),
        manifest.peer_dependencies.len(),
        manifest.dependencies.len()
    ));
    ui::success("Configuration is valid");

    let assembler = Assembler::new(&manifest, &config);
    for key in assembler.unknown_overrides() {
        ui::warning(&format!("Overrides for unknown variant '{}' are ignored", key));
    }

    let assembly = assembler.assemble();
    let mut table = Table::new(["variant", "externals", "output"]);
    for built in assembly.configs() {
        let externals: Vec<&str> = built.external.names().collect();
        let externals = if externals.is_empty() {
            "-".to_string()
        } else {
            externals.join(", ")
        };
        table.row([
            built.variant.to_string(),
            externals,
            built.output.file.display().to_string(),
        ]);
    }
    table.print();

    let failed = assembly.failures().count();
    if failed > 0 {
        for failure in assembly.failures() {
            ui::error(&failure.to_string());
        }
        return Err(CliError::VariantsFailed {
            failed,
            total: assembly.len(),
        });
    }

    ui::success("All checks passed!");
    Ok(())
}
