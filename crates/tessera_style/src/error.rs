//! Style resolution errors

use tessera_theme::ThemeError;
use thiserror::Error;

use crate::value::StyleValue;

/// Errors raised while resolving styles or reading stylesheets
#[derive(Error, Debug)]
pub enum StyleError {
    /// Missing provider or unknown token
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// A tokenized property was given something other than a token name
    #[error("property '{property}' expects a token name, got {found:?}")]
    ExpectedToken { property: String, found: StyleValue },

    /// The property is not valid for this kind of element
    #[error("property '{property}' is not supported on {element} elements")]
    UnsupportedProperty {
        property: String,
        element: &'static str,
    },

    /// Stylesheet slot does not exist
    #[error("stylesheet has no slot named '{0}'")]
    UnknownSlot(String),

    /// Static slot called with arguments, or parametric slot read as static
    #[error("stylesheet slot '{slot}' is {actual}, not {expected}")]
    SlotKind {
        slot: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid resolver config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

impl StyleError {
    /// Whether this is an unknown-token lookup failure
    pub fn is_unknown_token(&self) -> bool {
        matches!(self, StyleError::Theme(ThemeError::UnknownToken { .. }))
    }
}
