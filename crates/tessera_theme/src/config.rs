//! Provider configuration

use serde::Deserialize;

use crate::error::Result;
use crate::theme::ColorScheme;
use crate::tokens::DEFAULT_BREAKPOINT;

/// Settings a [`ThemeProvider`](crate::ThemeProvider) is mounted with
///
/// ```toml
/// default_scheme = "dark"
/// breakpoint = "sm"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Scheme used when there is neither an override nor a host preference
    pub default_scheme: ColorScheme,
    /// Responsive breakpoint used to pick typography presets
    pub breakpoint: String,
}

impl ProviderConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_scheme: ColorScheme::Light,
            breakpoint: DEFAULT_BREAKPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = ProviderConfig::from_toml_str("breakpoint = \"sm\"").unwrap();
        assert_eq!(config.default_scheme, ColorScheme::Light);
        assert_eq!(config.breakpoint, "sm");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ProviderConfig::from_toml_str("scheme = \"dark\"").is_err());
    }
}
