//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

use crate::theme::ColorScheme;
use crate::tokens::TokenNamespace;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A theme consumer ran outside of any `ThemeProvider` scope
    #[error("{consumer} must be used within a ThemeProvider; no theme context is in scope")]
    MissingProvider { consumer: &'static str },

    /// A token name is absent from the active theme
    #[error("unknown {namespace} token '{token}' in the {scheme} theme")]
    UnknownToken {
        namespace: TokenNamespace,
        token: String,
        scheme: ColorScheme,
    },

    /// A token is defined for one scheme but not the other
    #[error("{namespace} token '{token}' is defined for {present} but missing for {missing}")]
    SchemeMismatch {
        namespace: TokenNamespace,
        token: String,
        present: ColorScheme,
        missing: ColorScheme,
    },

    /// Preset id not in the built-in catalog
    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),

    /// Color scheme name not recognised
    #[error("unknown color scheme '{0}', expected 'light' or 'dark'")]
    UnknownScheme(String),

    /// Theme file extension is neither `.toml` nor `.json`
    #[error("unsupported theme file format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
