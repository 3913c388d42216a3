//! Color tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Color role group a role name is looked up in
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorGroup {
    Background,
    Text,
    Border,
}

/// Semantic color roles of one group: role name to color string
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRoles(FxHashMap<String, String>);

impl ColorRoles {
    pub fn new<K, V>(roles: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            roles
                .into_iter()
                .map(|(role, color)| (role.into(), color.into()))
                .collect(),
        )
    }

    /// Get a color by role name
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, role: impl Into<String>, color: impl Into<String>) {
        self.0.insert(role.into(), color.into());
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorTokens {
    pub bg: ColorRoles,
    pub text: ColorRoles,
    pub border: ColorRoles,
}

impl ColorTokens {
    /// Role group by key
    pub fn group(&self, group: ColorGroup) -> &ColorRoles {
        match group {
            ColorGroup::Background => &self.bg,
            ColorGroup::Text => &self.text,
            ColorGroup::Border => &self.border,
        }
    }

    /// Get a color by group and role name
    pub fn get(&self, group: ColorGroup, role: &str) -> Option<&str> {
        self.group(group).get(role)
    }

    /// Color tokens for a light color scheme
    pub fn light() -> Self {
        Self {
            bg: ColorRoles::new([
                ("base", "#FFFFFF"),
                ("surface", "#F0F0F0"),
                ("muted", "#E4E4E7"),
                ("accent", "#4C3AE8"),
                ("accentSubtle", "#ECEAFD"),
                ("error", "#D92D20"),
                ("inverse", "#18181B"),
                ("overlay", "rgba(0, 0, 0, 0.4)"),
            ]),
            text: ColorRoles::new([
                ("base", "#18181B"),
                ("muted", "#52525B"),
                ("disabled", "#A1A1AA"),
                ("accent", "#4C3AE8"),
                ("error", "#D92D20"),
                ("inverse", "#FFFFFF"),
            ]),
            border: ColorRoles::new([
                ("base", "#D4D4D8"),
                ("muted", "#E4E4E7"),
                ("accent", "#4C3AE8"),
                ("error", "#D92D20"),
                ("focus", "#4C3AE8"),
            ]),
        }
    }

    /// Color tokens for a dark color scheme
    pub fn dark() -> Self {
        Self {
            bg: ColorRoles::new([
                ("base", "#09090B"),
                ("surface", "#1C1C1F"),
                ("muted", "#27272A"),
                ("accent", "#7A6CF0"),
                ("accentSubtle", "#221E45"),
                ("error", "#F04438"),
                ("inverse", "#FAFAFA"),
                ("overlay", "rgba(0, 0, 0, 0.6)"),
            ]),
            text: ColorRoles::new([
                ("base", "#FAFAFA"),
                ("muted", "#A1A1AA"),
                ("disabled", "#52525B"),
                ("accent", "#9D93F5"),
                ("error", "#F97066"),
                ("inverse", "#09090B"),
            ]),
            border: ColorRoles::new([
                ("base", "#3F3F46"),
                ("muted", "#27272A"),
                ("accent", "#7A6CF0"),
                ("error", "#F04438"),
                ("focus", "#9D93F5"),
            ]),
        }
    }
}
