//! Tessera Theme System
//!
//! Design tokens, light/dark theme tables and a scoped theme provider.
//!
//! # Overview
//!
//! - **Design tokens**: spacing, sizes, color roles, radii, shadows, typography
//! - **Theme tables**: a light and a dark [`Theme`] validated to define the
//!   same tokens, loadable from TOML or JSON
//! - **Scheme resolution**: explicit override, then host preference, then a
//!   configured default
//! - **Scoped context**: a [`ThemeProvider`] publishes a [`ThemeContext`] to
//!   its subtree through a [`Scope`]; consumers outside any provider fail with
//!   [`ThemeError::MissingProvider`]
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_theme::{presets, use_theme, EnvPreference, ThemeProvider};
//!
//! let provider = ThemeProvider::new(Arc::new(presets::default_table()), EnvPreference::default());
//! let scope = provider.scope();
//!
//! let theme = use_theme(&scope).unwrap().theme();
//! assert_eq!(theme.spacing("s16").unwrap(), 16);
//! assert_eq!(theme.spacing("-s16").unwrap(), -16);
//! ```
//!
//! # Tokens
//!
//! Tokens are looked up by name. Unknown names are errors, never silent
//! defaults:
//!
//! - [`SpacingTokens`]: pixel spacing scale with derived negative steps
//! - [`SizeTokens`]: pixel size scale plus the `full` sentinel
//! - [`ColorTokens`]: `bg`, `text` and `border` role groups
//! - [`RadiusTokens`]: border radii
//! - [`ShadowTokens`]: ordered box shadow layers
//! - [`TypographyTokens`]: heading/body presets per breakpoint

pub mod config;
pub mod error;
pub mod platform;
pub mod presets;
pub mod provider;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::ProviderConfig;
pub use error::{Result, ThemeError};
pub use platform::{
    detect_system_color_scheme, EnvPreference, FixedPreference, NoPreference, SchemePreference,
};
pub use presets::{default_table, ThemePreset};
pub use provider::{use_color_scheme, use_theme, Generation, Scope, ThemeContext, ThemeProvider};
pub use theme::{ColorScheme, Theme, ThemeTable};
pub use tokens::*;
