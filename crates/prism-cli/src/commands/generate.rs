//! Generate command implementation.
//!
//! Assembles the variant configurations and writes them as a JSON array,
//! in catalog order, to stdout or `--out`.

use std::fs;

use prism_variants::{Assembler, VariantConfig, VariantId};

use crate::cli::GenerateArgs;
use crate::commands::utils::{self, Inputs};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the generate command.
///
/// # Errors
///
/// Manifest and config problems abort before anything is emitted. Variant
/// failures do not: every successful variant is still written, then
/// [`CliError::VariantsFailed`] is returned so the process exits non-zero.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let Inputs { manifest, config } = utils::load_inputs(&args.input)?;

    let mut assembler = Assembler::new(&manifest, &config);
    if !args.variants.is_empty() {
        assembler = assembler.with_variants(args.variants.iter().copied().map(VariantId::from));
    }

    let assembly = assembler.assemble();
    for failure in assembly.failures() {
        ui::error(&failure.to_string());
    }

    let configs: Vec<&VariantConfig> = assembly.configs().collect();
    let pretty = !args.compact && config.settings.pretty.unwrap_or(true);
    let json = render(&configs, pretty)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, format!("{json}\n")).with_path(path)?;
            ui::success(&format!(
                "Wrote {} configuration(s) to {}",
                configs.len(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    let failed = assembly.failures().count();
    if failed > 0 {
        return Err(CliError::VariantsFailed {
            failed,
            total: assembly.len(),
        });
    }

    Ok(())
}

/// Serialize the configurations.
pub fn render(configs: &[&VariantConfig], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(configs)?
    } else {
        serde_json::to_string(configs)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_variants::{DependencyManifest, PrismConfig};

    #[test]
    fn test_render_compact_and_pretty() {
        let manifest = DependencyManifest::new("dist/lib.esm.js").with_peer_dependencies(["react"]);
        let config = PrismConfig::default();
        let assembly = Assembler::new(&manifest, &config)
            .with_variants([VariantId::Esm])
            .assemble();
        let configs: Vec<_> = assembly.configs().collect();

        let compact = render(&configs, false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"[{"variant":"esm""#));

        let pretty = render(&configs, true).unwrap();
        assert!(pretty.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false).unwrap(), "[]");
    }
}
