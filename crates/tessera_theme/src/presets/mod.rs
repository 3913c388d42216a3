//! Built-in theme table presets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ThemeError;
use crate::theme::{ColorScheme, Theme, ThemeTable};
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default Tessera palette.
    #[default]
    Tessera,
    /// Maximum-contrast palette for accessibility settings.
    HighContrast,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tessera => "tessera",
            Self::HighContrast => "high-contrast",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tessera => "Tessera",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Tessera, ThemePreset::HighContrast];
        &PRESETS
    }

    /// Build the light/dark theme table for this preset.
    pub fn table(self) -> ThemeTable {
        match self {
            Self::Tessera => ThemeTable::new(self.id(), Theme::light(), Theme::dark()),
            Self::HighContrast => ThemeTable::new(
                self.id(),
                palette_theme(ColorScheme::Light, HIGH_CONTRAST_LIGHT),
                palette_theme(ColorScheme::Dark, HIGH_CONTRAST_DARK),
            ),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Table of the default preset.
pub fn default_table() -> ThemeTable {
    ThemePreset::default().table()
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: &'static str,
    surface: &'static str,
    muted: &'static str,
    foreground: &'static str,
    muted_foreground: &'static str,
    accent: &'static str,
    destructive: &'static str,
    border: &'static str,
}

const HIGH_CONTRAST_LIGHT: BasePalette = BasePalette {
    background: "#FFFFFF",
    surface: "#FFFFFF",
    muted: "#E5E5E5",
    foreground: "#000000",
    muted_foreground: "#1A1A1A",
    accent: "#0000CC",
    destructive: "#B00000",
    border: "#000000",
};

const HIGH_CONTRAST_DARK: BasePalette = BasePalette {
    background: "#000000",
    surface: "#000000",
    muted: "#1F1F1F",
    foreground: "#FFFFFF",
    muted_foreground: "#F0F0F0",
    accent: "#FFD60A",
    destructive: "#FF6B6B",
    border: "#FFFFFF",
};

/// Built-in scales with colors derived from a palette.
///
/// The role names match [`ColorTokens::light`] so tables built here pass
/// [`ThemeTable::validate`] and can be swapped with the default preset.
fn palette_theme(scheme: ColorScheme, base: BasePalette) -> Theme {
    let mut theme = Theme::new(scheme);
    theme.colors = ColorTokens {
        bg: ColorRoles::new([
            ("base", base.background),
            ("surface", base.surface),
            ("muted", base.muted),
            ("accent", base.accent),
            ("accentSubtle", base.muted),
            ("error", base.destructive),
            ("inverse", base.foreground),
            ("overlay", base.foreground),
        ]),
        text: ColorRoles::new([
            ("base", base.foreground),
            ("muted", base.muted_foreground),
            ("disabled", base.muted_foreground),
            ("accent", base.accent),
            ("error", base.destructive),
            ("inverse", base.background),
        ]),
        border: ColorRoles::new([
            ("base", base.border),
            ("muted", base.border),
            ("accent", base.accent),
            ("error", base.destructive),
            ("focus", base.accent),
        ]),
    };
    theme
}
