pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use manifest::DependencyManifest;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::ConfigDiscovery;
pub use validation::{validate_schema, ConfigValidator, SchemaValidator};
