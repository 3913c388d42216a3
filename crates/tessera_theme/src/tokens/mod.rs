//! Design tokens for theming
//!
//! Tokens are the named, theme-relative values a component refers to instead
//! of hard-coding pixels or colors:
//! - Spacing (padding, margin, gap)
//! - Sizes (width, height and their bounds)
//! - Colors (background, text and border roles)
//! - Border radii
//! - Shadows
//! - Typography presets

mod color;
mod radius;
mod shadow;
mod size;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use size::*;
pub use spacing::*;
pub use typography::*;

use std::fmt;

/// Token namespace a lookup was made against
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TokenNamespace {
    Spacing,
    Size,
    BackgroundColor,
    TextColor,
    BorderColor,
    BorderRadius,
    Shadow,
    Typography,
}

impl TokenNamespace {
    /// Path of the namespace inside a theme document
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spacing => "spacings",
            Self::Size => "sizes",
            Self::BackgroundColor => "colors.bg",
            Self::TextColor => "colors.text",
            Self::BorderColor => "colors.border",
            Self::BorderRadius => "borderRadius",
            Self::Shadow => "shadows",
            Self::Typography => "typographies",
        }
    }
}

impl fmt::Display for TokenNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
