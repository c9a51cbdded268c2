//! The fixed variant matrix.

use serde::{Deserialize, Serialize};

/// One distributable bundle: a module format paired with an environment mode.
///
/// Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantId {
    CjsDevelopment,
    CjsProduction,
    Esm,
    UmdDevelopment,
    UmdProduction,
}

/// Environment mode of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

/// Output module format tag, as understood by the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleFormat {
    /// CommonJS
    #[serde(rename = "cjs")]
    CommonJs,
    /// ECMAScript modules
    #[serde(rename = "es")]
    EsModule,
    /// Universal module definition, usable as a plain script via globals
    #[serde(rename = "umd")]
    Universal,
}

const ALL: [VariantId; 5] = [
    VariantId::CjsDevelopment,
    VariantId::CjsProduction,
    VariantId::Esm,
    VariantId::UmdDevelopment,
    VariantId::UmdProduction,
];

/// Every variant, in emission order.
pub fn list() -> &'static [VariantId] {
    &ALL
}

impl VariantId {
    pub fn all() -> &'static [VariantId] {
        list()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariantId::CjsDevelopment => "cjs-development",
            VariantId::CjsProduction => "cjs-production",
            VariantId::Esm => "esm",
            VariantId::UmdDevelopment => "umd-development",
            VariantId::UmdProduction => "umd-production",
        }
    }

    /// Only the two explicitly optimized builds count as production. The ES
    /// module build is left for the consumer's own bundler to optimize.
    pub fn is_production(self) -> bool {
        matches!(self, VariantId::CjsProduction | VariantId::UmdProduction)
    }

    pub fn mode(self) -> Mode {
        if self.is_production() {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn format(self) -> ModuleFormat {
        match self {
            VariantId::CjsDevelopment | VariantId::CjsProduction => ModuleFormat::CommonJs,
            VariantId::Esm => ModuleFormat::EsModule,
            VariantId::UmdDevelopment | VariantId::UmdProduction => ModuleFormat::Universal,
        }
    }
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl ModuleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "cjs",
            ModuleFormat::EsModule => "es",
            ModuleFormat::Universal => "umd",
        }
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VariantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown variant '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
