//! Input loading shared by the commands.

use std::path::Path;

use prism_config::{validate_schema, ConfigDiscovery, DependencyManifest, PrismConfig};

use crate::cli::InputArgs;
use crate::error::Result;

/// Manifest plus validated config for one run.
pub(crate) struct Inputs {
    pub manifest: DependencyManifest,
    pub config: PrismConfig,
}

/// Load the manifest and the config that sits next to it.
pub(crate) fn load_inputs(input: &InputArgs) -> Result<Inputs> {
    let manifest = DependencyManifest::load(&input.manifest)?;
    let config = load_config(input)?;
    validate_schema(&config)?;

    tracing::debug!(
        manifest = %input.manifest.display(),
        overrides = config.variants.len(),
        "loaded inputs"
    );

    Ok(Inputs { manifest, config })
}

/// Config from `--config`, or discovered in the manifest's directory.
pub(crate) fn load_config(input: &InputArgs) -> Result<PrismConfig> {
    let discovery = ConfigDiscovery::new(manifest_root(&input.manifest));
    let config = match &input.config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load_or_default()?,
    };
    Ok(config)
}

fn manifest_root(manifest: &Path) -> &Path {
    manifest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_manifest_root() {
        assert_eq!(manifest_root(Path::new("package.json")), Path::new("."));
        assert_eq!(
            manifest_root(Path::new("packages/icons/package.json")),
            Path::new("packages/icons")
        );
    }

    #[test]
    fn test_missing_manifest_is_reported() {
        let input = InputArgs {
            manifest: PathBuf::from("/nonexistent/prism/package.json"),
            config: None,
        };
        let err = load_inputs(&input).err().unwrap();
        assert!(err.to_string().contains("package manifest not found"));
    }
}
