//! # prism-variants
//!
//! Derives one bundler configuration per distributable variant of a compiled
//! component library:
//!
//! | variant           | format | mode        | externals                  |
//! |-------------------|--------|-------------|----------------------------|
//! | `cjs-development` | cjs    | development | peers + dependencies       |
//! | `cjs-production`  | cjs    | production  | peers + dependencies       |
//! | `esm`             | es     | development | peers + dependencies       |
//! | `umd-development` | umd    | development | peers + validation library |
//! | `umd-production`  | umd    | production  | peers                      |
//!
//! The crate only decides; it never bundles. Each [`VariantConfig`] is a plain
//! serializable record for an external bundler to consume.
//!
//! ## Quick Start
//!
//! ```
//! use prism_config::{DependencyManifest, PrismConfig};
//! use prism_variants::{Assembler, VariantId};
//!
//! let manifest = DependencyManifest::new("dist/react-svg.esm.js")
//!     .with_peer_dependencies(["react"])
//!     .with_dependencies(["classnames"]);
//! let config = PrismConfig::default();
//!
//! let assembly = Assembler::new(&manifest, &config).assemble();
//! assert!(assembly.is_complete());
//!
//! let umd = assembly.get(VariantId::UmdProduction).unwrap();
//! assert!(umd.external.matches("react"));
//! assert!(!umd.external.matches("classnames"));
//! ```

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod external;
pub mod output;
pub mod pipeline;
pub mod transform;

pub use assemble::{Assembler, Assembly, VariantConfig, VariantOutcome, ENTRY_POINT};
pub use catalog::{Mode, ModuleFormat, VariantId};
pub use error::{Result, VariantError};
pub use external::{externals_for, ExternalPredicate};
pub use output::{describe, OutputDescriptor};
pub use pipeline::{build_stages, Stage, StageKind};
pub use transform::{transform_config_for, PropTypesMode, TransformConfig};

pub use prism_config::{DependencyManifest, PluginSpec, PrismConfig};
