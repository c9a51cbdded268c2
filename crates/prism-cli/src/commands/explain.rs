//! Explain command implementation.

use prism_variants::Assembler;

use crate::cli::ExplainArgs;
use crate::commands::utils::{self, Inputs};
use crate::error::{CliError, Result};
use crate::ui::Table;

/// Print, per variant, whether `args.module` stays external and which
/// listed package causes it.
pub fn execute(args: ExplainArgs) -> Result<()> {
    let module = args.module.trim();
    if module.is_empty() {
        return Err(CliError::InvalidArgument(
            "module specifier cannot be empty".to_string(),
        ));
    }

    let Inputs { manifest, config } = utils::load_inputs(&args.input)?;
    let classified = Assembler::new(&manifest, &config).classify(module);

    let mut table = Table::new(["variant", "treatment", "matched"]);
    for (variant, matched) in classified {
        let treatment = if matched.is_some() { "external" } else { "bundled" };
        table.row([
            variant.to_string(),
            treatment.to_string(),
            matched.unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.print();
    Ok(())
}
