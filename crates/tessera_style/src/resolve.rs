//! Token-to-style resolution
//!
//! Two variants share one set of rules:
//!
//! - [`Resolver::resolve_view`] for box/layout elements
//! - [`Resolver::resolve_text`] for text elements, which additionally accept
//!   the `color` text role
//!
//! Resolution is a pure function of `(theme, lx, bare)`. The optional bare
//! style is applied first, so resolved token properties override bare
//! properties with the same key.

use tessera_theme::{ColorGroup, SizeValue, TextPreset, Theme, TypographyGroup};

use crate::config::{ResolverConfig, UnknownTokenPolicy};
use crate::error::{Result, StyleError};
use crate::key::{PropertyClass, StyleKey};
use crate::lx::Lx;
use crate::style::Style;
use crate::value::{BoxShadow, StyleValue};

/// Value a `full` size token resolves to
pub const FULL_SIZE: &str = "100%";

/// Element kind a style is resolved for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    View,
    Text,
}

impl Variant {
    fn name(self) -> &'static str {
        match self {
            Variant::View => "view",
            Variant::Text => "text",
        }
    }
}

/// Configurable token resolver
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve an intent for a box/layout element
    pub fn resolve_view(&self, theme: &Theme, lx: &Lx, bare: Option<&Style>) -> Result<Style> {
        self.resolve(Variant::View, theme, lx, bare)
    }

    /// Resolve an intent for a text element
    pub fn resolve_text(&self, theme: &Theme, lx: &Lx, bare: Option<&Style>) -> Result<Style> {
        self.resolve(Variant::Text, theme, lx, bare)
    }

    pub fn resolve(
        &self,
        variant: Variant,
        theme: &Theme,
        lx: &Lx,
        bare: Option<&Style>,
    ) -> Result<Style> {
        let mut out = bare.cloned().unwrap_or_default();
        for (key, value) in lx.iter() {
            match resolve_property(variant, theme, key, value) {
                Ok(resolved) => {
                    out.insert(key.clone(), resolved);
                }
                Err(err)
                    if err.is_unknown_token()
                        && self.config.unknown_tokens == UnknownTokenPolicy::Omit =>
                {
                    tracing::warn!("omitting '{}': {}", key, err);
                    out.remove(key);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }
}

fn token<'v>(key: &StyleKey, value: &'v StyleValue) -> Result<&'v str> {
    value.as_str().ok_or_else(|| StyleError::ExpectedToken {
        property: key.name().to_string(),
        found: value.clone(),
    })
}

fn resolve_property(
    variant: Variant,
    theme: &Theme,
    key: &StyleKey,
    value: &StyleValue,
) -> Result<StyleValue> {
    let resolved: StyleValue = match key.class() {
        PropertyClass::PassThrough => value.clone(),
        PropertyClass::Spacing => theme.spacing(token(key, value)?)?.into(),
        PropertyClass::Size => match theme.size(token(key, value)?)? {
            SizeValue::Px(px) => px.into(),
            SizeValue::Full => FULL_SIZE.into(),
        },
        PropertyClass::BackgroundColor => theme
            .color(ColorGroup::Background, token(key, value)?)?
            .into(),
        PropertyClass::BorderColor => theme.color(ColorGroup::Border, token(key, value)?)?.into(),
        PropertyClass::BorderRadius => theme.radius(token(key, value)?)?.into(),
        PropertyClass::Shadow => theme
            .shadow(token(key, value)?)?
            .iter()
            .map(BoxShadow::from)
            .collect::<Vec<_>>()
            .into(),
        PropertyClass::TextColor => {
            if variant != Variant::Text {
                return Err(StyleError::UnsupportedProperty {
                    property: key.name().to_string(),
                    element: variant.name(),
                });
            }
            theme.color(ColorGroup::Text, token(key, value)?)?.into()
        }
    };
    Ok(resolved)
}

/// Resolve an intent for a box/layout element with the default config
pub fn resolve_view_style(theme: &Theme, lx: &Lx, bare: Option<&Style>) -> Result<Style> {
    Resolver::default().resolve_view(theme, lx, bare)
}

/// Resolve an intent for a text element with the default config
pub fn resolve_text_style(theme: &Theme, lx: &Lx, bare: Option<&Style>) -> Result<Style> {
    Resolver::default().resolve_text(theme, lx, bare)
}

/// A typography preset reference (`heading.h1`, `body.body2`, ...)
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Typography {
    pub group: TypographyGroup,
    pub name: String,
}

impl Typography {
    pub fn heading(name: impl Into<String>) -> Self {
        Self {
            group: TypographyGroup::Heading,
            name: name.into(),
        }
    }

    pub fn body(name: impl Into<String>) -> Self {
        Self {
            group: TypographyGroup::Body,
            name: name.into(),
        }
    }
}

/// Style layer for a typography preset at the given breakpoint
pub fn typography_style(theme: &Theme, breakpoint: &str, typography: &Typography) -> Result<Style> {
    let TextPreset {
        font_size,
        font_weight,
        line_height,
        letter_spacing,
        font_family,
    } = theme.typography(breakpoint, typography.group, &typography.name)?;

    let mut style = Style::new()
        .with(StyleKey::FontSize, *font_size)
        .with(StyleKey::FontWeight, font_weight.as_str())
        .with(StyleKey::LineHeight, *line_height)
        .with(StyleKey::LetterSpacing, *letter_spacing);
    if let Some(family) = font_family {
        style.insert(StyleKey::FontFamily, family.as_str());
    }
    Ok(style)
}
