//! Per-variant construction errors.
//!
//! A `VariantError` only ever poisons the variant it names; the assembler
//! keeps building the others.

use thiserror::Error;

use crate::catalog::VariantId;

pub type Result<T> = std::result::Result<T, VariantError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariantError {
    /// A plugin entry cannot be handed to the transformer
    #[error("invalid transform plugin for {variant}: {message}")]
    InvalidPlugin { variant: VariantId, message: String },

    /// Two plugins (or a plugin and the variant policy) disagree on how
    /// validation declarations are handled
    #[error("conflicting transform plugins for {variant}: {message}")]
    ConflictingPlugins { variant: VariantId, message: String },

    /// The transform config does not fit the variant it was built for
    #[error("malformed transform config for {variant}: {message}")]
    MalformedTransform { variant: VariantId, message: String },
}

impl VariantError {
    /// The variant this error belongs to
    pub fn variant(&self) -> VariantId {
        match self {
            VariantError::InvalidPlugin { variant, .. }
            | VariantError::ConflictingPlugins { variant, .. }
            | VariantError::MalformedTransform { variant, .. } => *variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_variant() {
        let err = VariantError::InvalidPlugin {
            variant: VariantId::UmdProduction,
            message: "plugin name cannot be empty".to_string(),
        };
        assert_eq!(err.variant(), VariantId::UmdProduction);
        assert!(err.to_string().contains("umd-production"));
        assert!(err.to_string().contains("plugin name cannot be empty"));
    }
}
