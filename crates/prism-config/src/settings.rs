//! Global settings that do not affect the generated configurations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter when neither a CLI flag nor `RUST_LOG` is given
    #[serde(default)]
    pub log_level: Option<String>,

    /// Pretty-print emitted JSON
    #[serde(default)]
    pub pretty: Option<bool>,
}
