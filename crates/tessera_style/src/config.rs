//! Resolver configuration

use serde::Deserialize;

use crate::error::Result;

/// What to do with a token name missing from the active theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTokenPolicy {
    /// Fail the resolution with the lookup error
    #[default]
    Error,
    /// Drop the property from the output and log a warning
    Omit,
}

/// Resolver settings
///
/// ```toml
/// unknown_tokens = "omit"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub unknown_tokens: UnknownTokenPolicy,
}

impl ResolverConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Config that keeps unknown tokens out of the output instead of failing
    pub fn lenient() -> Self {
        Self {
            unknown_tokens: UnknownTokenPolicy::Omit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_failing_loudly() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config.unknown_tokens, UnknownTokenPolicy::Error);
    }

    #[test]
    fn parses_omit_policy() {
        let config = ResolverConfig::from_toml_str("unknown_tokens = \"omit\"").unwrap();
        assert_eq!(config, ResolverConfig::lenient());
    }
}
