//! Typography tokens for theming
//!
//! Presets are grouped by responsive breakpoint (`xs`, `sm`, ...) and then by
//! `heading` / `body`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Breakpoint used when none is configured
pub const DEFAULT_BREAKPOINT: &str = "xs";

/// Typography group within a breakpoint
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyGroup {
    Heading,
    Body,
}

impl TypographyGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for TypographyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named text style preset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextPreset {
    pub font_size: f32,
    pub font_weight: String,
    pub line_height: f32,
    #[serde(default)]
    pub letter_spacing: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextPreset {
    pub fn new(font_size: f32, font_weight: &str, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            font_size,
            font_weight: font_weight.to_string(),
            line_height,
            letter_spacing,
            font_family: None,
        }
    }
}

/// Heading and body presets of one breakpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographySet {
    #[serde(default)]
    pub heading: FxHashMap<String, TextPreset>,
    #[serde(default)]
    pub body: FxHashMap<String, TextPreset>,
}

impl TypographySet {
    pub fn group(&self, group: TypographyGroup) -> &FxHashMap<String, TextPreset> {
        match group {
            TypographyGroup::Heading => &self.heading,
            TypographyGroup::Body => &self.body,
        }
    }
}

/// Typography presets keyed by breakpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypographyTokens(FxHashMap<String, TypographySet>);

impl TypographyTokens {
    pub fn new(values: impl IntoIterator<Item = (String, TypographySet)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Get a preset by breakpoint, group and name
    pub fn get(&self, breakpoint: &str, group: TypographyGroup, name: &str) -> Option<&TextPreset> {
        self.0.get(breakpoint)?.group(group).get(name)
    }

    /// Flattened `breakpoint.group.name` keys of every preset
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().flat_map(|(breakpoint, set)| {
            [TypographyGroup::Heading, TypographyGroup::Body]
                .into_iter()
                .flat_map(move |group| {
                    set.group(group)
                        .keys()
                        .map(move |name| format!("{breakpoint}.{group}.{name}"))
                })
        })
    }

    pub fn insert(&mut self, breakpoint: impl Into<String>, set: TypographySet) {
        self.0.insert(breakpoint.into(), set);
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        let presets = |scale: f32| TypographySet {
            heading: [
                ("h1", TextPreset::new(32.0 * scale, "600", 40.0 * scale, -0.5)),
                ("h2", TextPreset::new(24.0 * scale, "600", 32.0 * scale, -0.25)),
                ("h3", TextPreset::new(20.0 * scale, "600", 28.0 * scale, 0.0)),
            ]
            .into_iter()
            .map(|(name, preset)| (name.to_string(), preset))
            .collect(),
            body: [
                ("body1", TextPreset::new(16.0, "400", 24.0, 0.0)),
                ("body2", TextPreset::new(14.0, "400", 20.0, 0.0)),
                ("body3", TextPreset::new(12.0, "400", 16.0, 0.1)),
            ]
            .into_iter()
            .map(|(name, preset)| (name.to_string(), preset))
            .collect(),
        };
        Self::new([
            (DEFAULT_BREAKPOINT.to_string(), presets(1.0)),
            ("sm".to_string(), presets(1.125)),
        ])
    }
}
