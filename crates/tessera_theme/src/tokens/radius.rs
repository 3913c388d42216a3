//! Border radius tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Border radius scale: token name to pixels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiusTokens(FxHashMap<String, i32>);

impl RadiusTokens {
    pub fn new(values: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Get radius by token name
    pub fn get(&self, name: &str) -> Option<i32> {
        self.0.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i32) {
        self.0.insert(name.into(), value);
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::new(
            [
                ("none", 0),
                ("xs", 2),
                ("sm", 4),
                ("md", 8),
                ("lg", 12),
                ("xl", 16),
                ("full", 9999),
            ]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value)),
        )
    }
}
