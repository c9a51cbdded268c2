//! Output targets per variant.

use std::collections::BTreeMap;
use std::path::PathBuf;

use prism_config::{DependencyManifest, PrismConfig};
use serde::Serialize;

use crate::catalog::{ModuleFormat, VariantId};

/// Where and how a variant is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDescriptor {
    pub file: PathBuf,
    pub format: ModuleFormat,
    /// Global the library's exports are assigned to
    pub name: String,
    /// External module name to global variable; only used by the universal
    /// format when loaded as a plain script
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, String>,
    pub sourcemap: bool,
}

/// Output descriptor for a variant.
///
/// The ES module build is written wherever the manifest's `module` field
/// points; every other build lands in the configured output directory as
/// `<stem>.<format>.<mode>.js`.
pub fn describe(
    variant: VariantId,
    manifest: &DependencyManifest,
    config: &PrismConfig,
) -> OutputDescriptor {
    let library = &config.library;
    let mode = variant.mode();

    let (file, globals) = match variant {
        VariantId::CjsDevelopment | VariantId::CjsProduction => (
            library
                .out_dir
                .join(format!("{}.cjs.{}.js", library.file_stem, mode)),
            BTreeMap::new(),
        ),
        VariantId::Esm => (PathBuf::from(&manifest.module), BTreeMap::new()),
        VariantId::UmdDevelopment => {
            // The validation library stays external in development
            let mut globals = runtime_globals(config);
            globals.insert(
                config.validation.package.clone(),
                config.validation.global.clone(),
            );
            (
                library
                    .out_dir
                    .join(format!("{}.umd.{}.js", library.file_stem, mode)),
                globals,
            )
        }
        VariantId::UmdProduction => (
            library
                .out_dir
                .join(format!("{}.umd.{}.js", library.file_stem, mode)),
            runtime_globals(config),
        ),
    };

    OutputDescriptor {
        file,
        format: variant.format(),
        name: library.global_name.clone(),
        globals,
        sourcemap: true,
    }
}

fn runtime_globals(config: &PrismConfig) -> BTreeMap<String, String> {
    config
        .globals
        .iter()
        .map(|(package, global)| (package.clone(), global.clone()))
        .collect()
}
