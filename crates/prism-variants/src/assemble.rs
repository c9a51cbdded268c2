//! Composes the per-variant policies into bundler configurations.

use prism_config::{DependencyManifest, PrismConfig};
use serde::Serialize;

use crate::catalog::{self, VariantId};
use crate::error::{Result, VariantError};
use crate::external::{externals_for, ExternalPredicate};
use crate::output::{describe, OutputDescriptor};
use crate::pipeline::{build_stages, Stage};
use crate::transform::{transform_config_for, TransformConfig};

/// Compiled library entry point every variant starts from
pub const ENTRY_POINT: &str = "./compiled/index.js";

/// Everything the bundler needs to produce one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantConfig {
    pub variant: VariantId,
    pub input: String,
    pub external: ExternalPredicate,
    /// Also carried by the transform stage; kept here for direct inspection
    #[serde(skip)]
    pub transform: TransformConfig,
    pub stages: Vec<Stage>,
    pub output: OutputDescriptor,
}

pub type VariantOutcome = Result<VariantConfig>;

/// Result of one assembly run, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub outcomes: Vec<VariantOutcome>,
}

impl Assembly {
    /// Successfully built configurations, in order
    pub fn configs(&self) -> impl Iterator<Item = &VariantConfig> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &VariantError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    /// True when no variant failed
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }

    pub fn get(&self, variant: VariantId) -> Option<&VariantConfig> {
        self.configs().find(|config| config.variant == variant)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn into_configs(self) -> Vec<VariantConfig> {
        self.outcomes.into_iter().filter_map(|outcome| outcome.ok()).collect()
    }
}

/// Builds variant configurations from a manifest and config.
///
/// # Example
///
/// ```
/// use prism_config::{DependencyManifest, PrismConfig};
/// use prism_variants::{Assembler, VariantId};
///
/// let manifest = DependencyManifest::new("dist/lib.esm.js").with_peer_dependencies(["react"]);
/// let config = PrismConfig::default();
///
/// let assembly = Assembler::new(&manifest, &config)
///     .with_variants([VariantId::UmdProduction, VariantId::Esm])
///     .assemble();
///
/// let order: Vec<_> = assembly.configs().map(|c| c.variant).collect();
/// assert_eq!(order, [VariantId::Esm, VariantId::UmdProduction]);
/// ```
pub struct Assembler<'a> {
    manifest: &'a DependencyManifest,
    config: &'a PrismConfig,
    variants: Vec<VariantId>,
}

impl<'a> Assembler<'a> {
    pub fn new(manifest: &'a DependencyManifest, config: &'a PrismConfig) -> Self {
        Self {
            manifest,
            config,
            variants: catalog::list().to_vec(),
        }
    }

    /// Restrict assembly to a subset of variants. Catalog order is kept
    /// regardless of the order given.
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = VariantId>) -> Self {
        let wanted: Vec<VariantId> = variants.into_iter().collect();
        self.variants = catalog::list()
            .iter()
            .copied()
            .filter(|variant| wanted.contains(variant))
            .collect();
        self
    }

    /// Override keys in the config that do not name a variant.
    pub fn unknown_overrides(&self) -> Vec<&str> {
        self.config
            .variants
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<VariantId>().is_err())
            .collect()
    }

    /// Build every selected variant. A failing variant is recorded and the
    /// remaining ones are still built.
    pub fn assemble(&self) -> Assembly {
        for key in self.unknown_overrides() {
            tracing::warn!(key, "ignoring overrides for unknown variant");
        }

        let outcomes: Vec<VariantOutcome> = self
            .variants
            .iter()
            .map(|variant| {
                let outcome = self.build_variant(*variant);
                if let Err(err) = &outcome {
                    tracing::debug!(variant = %variant, error = %err, "variant configuration failed");
                }
                outcome
            })
            .collect();

        let assembly = Assembly { outcomes };
        tracing::info!(
            built = assembly.configs().count(),
            failed = assembly.failures().count(),
            "assembled variant configurations"
        );
        assembly
    }

    /// Build a single variant.
    pub fn build_variant(&self, variant: VariantId) -> Result<VariantConfig> {
        let external = externals_for(variant, self.manifest, self.config);
        let transform = transform_config_for(variant, self.config)?;
        let output = describe(variant, self.manifest, self.config);
        let stages = build_stages(variant, &external, transform.clone(), self.config)?;

        Ok(VariantConfig {
            variant,
            input: ENTRY_POINT.to_string(),
            external,
            transform,
            stages,
            output,
        })
    }

    /// For each selected variant, the listed name that makes `module`
    /// external, or `None` when it is bundled.
    pub fn classify(&self, module: &str) -> Vec<(VariantId, Option<String>)> {
        self.variants
            .iter()
            .map(|variant| {
                let external = externals_for(*variant, self.manifest, self.config);
                (*variant, external.matching(module).map(String::from))
            })
            .collect()
    }
}
