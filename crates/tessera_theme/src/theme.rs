//! Themes, color schemes and theme tables
//!
//! A [`Theme`] holds every token namespace for one color scheme. A
//! [`ThemeTable`] pairs the light and dark variants and is the unit a host
//! application hands to a [`ThemeProvider`](crate::ThemeProvider).

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::tokens::*;

/// Color scheme (light or dark mode)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Every supported scheme
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownScheme(other.to_string())),
        }
    }
}

/// All design tokens of one color scheme
///
/// Themes are immutable once published; lookups return a
/// [`ThemeError::UnknownToken`] instead of a silent default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    #[serde(skip)]
    scheme: ColorScheme,
    #[serde(default)]
    pub spacings: SpacingTokens,
    #[serde(default)]
    pub sizes: SizeTokens,
    pub colors: ColorTokens,
    #[serde(default)]
    pub border_radius: RadiusTokens,
    #[serde(default)]
    pub shadows: ShadowTokens,
    #[serde(default)]
    pub typographies: TypographyTokens,
}

impl Theme {
    /// Built-in token scales for the given scheme
    pub fn new(scheme: ColorScheme) -> Self {
        let (colors, shadows) = match scheme {
            ColorScheme::Light => (ColorTokens::light(), ShadowTokens::light()),
            ColorScheme::Dark => (ColorTokens::dark(), ShadowTokens::dark()),
        };
        Self {
            scheme,
            spacings: SpacingTokens::default(),
            sizes: SizeTokens::default(),
            colors,
            border_radius: RadiusTokens::default(),
            shadows,
            typographies: TypographyTokens::default(),
        }
    }

    pub fn light() -> Self {
        Self::new(ColorScheme::Light)
    }

    pub fn dark() -> Self {
        Self::new(ColorScheme::Dark)
    }

    /// Scheme this theme belongs to
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn unknown(&self, namespace: TokenNamespace, token: &str) -> ThemeError {
        ThemeError::UnknownToken {
            namespace,
            token: token.to_string(),
            scheme: self.scheme,
        }
    }

    // ========== Token Access ==========

    pub fn spacing(&self, token: &str) -> Result<i32> {
        self.spacings
            .get(token)
            .ok_or_else(|| self.unknown(TokenNamespace::Spacing, token))
    }

    pub fn size(&self, token: &str) -> Result<SizeValue> {
        self.sizes
            .get(token)
            .ok_or_else(|| self.unknown(TokenNamespace::Size, token))
    }

    pub fn color(&self, group: ColorGroup, role: &str) -> Result<&str> {
        self.colors.get(group, role).ok_or_else(|| {
            let namespace = match group {
                ColorGroup::Background => TokenNamespace::BackgroundColor,
                ColorGroup::Text => TokenNamespace::TextColor,
                ColorGroup::Border => TokenNamespace::BorderColor,
            };
            self.unknown(namespace, role)
        })
    }

    pub fn radius(&self, token: &str) -> Result<i32> {
        self.border_radius
            .get(token)
            .ok_or_else(|| self.unknown(TokenNamespace::BorderRadius, token))
    }

    pub fn shadow(&self, token: &str) -> Result<&[Shadow]> {
        self.shadows
            .get(token)
            .ok_or_else(|| self.unknown(TokenNamespace::Shadow, token))
    }

    pub fn typography(
        &self,
        breakpoint: &str,
        group: TypographyGroup,
        name: &str,
    ) -> Result<&TextPreset> {
        self.typographies
            .get(breakpoint, group, name)
            .ok_or_else(|| {
                self.unknown(
                    TokenNamespace::Typography,
                    &format!("{breakpoint}.{group}.{name}"),
                )
            })
    }

    /// Every stored `(namespace, token)` pair, sorted
    pub fn token_names(&self) -> BTreeSet<(TokenNamespace, String)> {
        fn add<'a>(
            names: &mut BTreeSet<(TokenNamespace, String)>,
            namespace: TokenNamespace,
            tokens: impl Iterator<Item = &'a str>,
        ) {
            names.extend(tokens.map(|token| (namespace, token.to_string())));
        }

        let mut names = BTreeSet::new();
        add(&mut names, TokenNamespace::Spacing, self.spacings.names());
        add(&mut names, TokenNamespace::Size, self.sizes.names());
        add(&mut names, TokenNamespace::BackgroundColor, self.colors.bg.names());
        add(&mut names, TokenNamespace::TextColor, self.colors.text.names());
        add(&mut names, TokenNamespace::BorderColor, self.colors.border.names());
        add(&mut names, TokenNamespace::BorderRadius, self.border_radius.names());
        add(&mut names, TokenNamespace::Shadow, self.shadows.names());
        names.extend(
            self.typographies
                .names()
                .map(|token| (TokenNamespace::Typography, token)),
        );
        names
    }
}

/// Light/dark theme pair supplied by the host application
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeTable {
    name: String,
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

/// On-disk shape of a theme table
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDocument {
    #[serde(default = "default_table_name")]
    name: String,
    light: Theme,
    dark: Theme,
}

fn default_table_name() -> String {
    "custom".to_string()
}

impl ThemeTable {
    /// Pair two themes, stamping each with its scheme
    pub fn new(name: impl Into<String>, mut light: Theme, mut dark: Theme) -> Self {
        light.scheme = ColorScheme::Light;
        dark.scheme = ColorScheme::Dark;
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme for the given scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<Theme> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Check that both schemes define the same token names in every namespace
    pub fn validate(&self) -> Result<()> {
        let light = self.light.token_names();
        let dark = self.dark.token_names();
        let pairs = [
            (&light, &dark, ColorScheme::Light, ColorScheme::Dark),
            (&dark, &light, ColorScheme::Dark, ColorScheme::Light),
        ];
        for (have, other, present, missing) in pairs {
            if let Some((namespace, token)) = have.difference(other).next() {
                return Err(ThemeError::SchemeMismatch {
                    namespace: *namespace,
                    token: token.clone(),
                    present,
                    missing,
                });
            }
        }
        Ok(())
    }

    fn from_document(doc: ThemeDocument) -> Result<Self> {
        let table = Self::new(doc.name, doc.light, doc.dark);
        table.validate()?;
        tracing::debug!("loaded theme table '{}'", table.name);
        Ok(table)
    }

    /// Parse and validate a TOML theme document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Self::from_document(toml::from_str(input)?)
    }

    /// Parse and validate a JSON theme document
    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(input)?)
    }

    /// Load a theme document, choosing the format by file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            _ => Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
