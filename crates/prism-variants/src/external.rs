//! Externalization policy.
//!
//! Decides, per variant, which imports stay unresolved in the bundle and are
//! left for the consumer to provide at load time.

use std::collections::BTreeSet;

use prism_config::{DependencyManifest, PrismConfig};
use serde::Serialize;

use crate::catalog::VariantId;

/// Set of externalized package names plus the matching rule.
///
/// An import is external when it is one of the names, or a sub-path of one
/// (`name/...`). Sharing leading characters is not enough: externalizing
/// `react` leaves `react-extra` bundled.
///
/// ```
/// use prism_variants::ExternalPredicate;
///
/// let external = ExternalPredicate::new(["react", "@tanem/svg-injector"]);
/// assert!(external.matches("react"));
/// assert!(external.matches("react/jsx-runtime"));
/// assert!(external.matches("@tanem/svg-injector/lib"));
/// assert!(!external.matches("react-dom"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExternalPredicate {
    names: BTreeSet<String>,
}

impl ExternalPredicate {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A predicate that externalizes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `id` must be left out of the bundle.
    pub fn matches(&self, id: &str) -> bool {
        self.matching(id).is_some()
    }

    /// The listed name that makes `id` external, if any.
    pub fn matching(&self, id: &str) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }

        // The id itself, then each prefix that ends right before a '/'
        self.names
            .get(id)
            .or_else(|| {
                id.match_indices('/')
                    .find_map(|(idx, _)| self.names.get(&id[..idx]))
            })
            .map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Externals for a variant.
///
/// - cjs and esm builds leave every peer and direct dependency to the host
///   module loader.
/// - The development universal build externalizes peers plus the validation
///   library only; other direct dependencies are inlined so the script works
///   standalone.
/// - The production universal build externalizes peers only.
pub fn externals_for(
    variant: VariantId,
    manifest: &DependencyManifest,
    config: &PrismConfig,
) -> ExternalPredicate {
    let peers = manifest.peer_dependencies.iter().cloned();

    let predicate = match variant {
        VariantId::CjsDevelopment | VariantId::CjsProduction | VariantId::Esm => {
            ExternalPredicate::new(peers.chain(manifest.dependencies.iter().cloned()))
        }
        VariantId::UmdDevelopment => {
            ExternalPredicate::new(peers.chain([config.validation.package.clone()]))
        }
        VariantId::UmdProduction => ExternalPredicate::new(peers),
    };

    tracing::debug!(
        variant = %variant,
        externals = predicate.len(),
        "derived external predicate"
    );

    predicate
}
