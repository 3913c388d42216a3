//! Spacing tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Default spacing scale (name, pixels)
const DEFAULT_SCALE: [(&str, i32); 18] = [
    ("s0", 0),
    ("s1", 1),
    ("s2", 2),
    ("s4", 4),
    ("s6", 6),
    ("s8", 8),
    ("s10", 10),
    ("s12", 12),
    ("s14", 14),
    ("s16", 16),
    ("s20", 20),
    ("s24", 24),
    ("s32", 32),
    ("s40", 40),
    ("s48", 48),
    ("s56", 56),
    ("s64", 64),
    ("s80", 80),
];

/// Spacing scale: token name to pixels
///
/// Only positive steps are stored. A token prefixed with `-` resolves to the
/// negated value of its positive counterpart, so `-s16` is `-16` whenever
/// `s16` is `16`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpacingTokens(FxHashMap<String, i32>);

impl SpacingTokens {
    pub fn new(values: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Get spacing by token name, deriving negative steps
    pub fn get(&self, name: &str) -> Option<i32> {
        if let Some(value) = self.0.get(name) {
            return Some(*value);
        }
        name.strip_prefix('-')
            .and_then(|positive| self.0.get(positive))
            .and_then(|value| value.checked_neg())
    }

    /// Stored token names (negative steps are not listed)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i32) {
        self.0.insert(name.into(), value);
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::new(
            DEFAULT_SCALE
                .iter()
                .map(|(name, value)| (name.to_string(), *value)),
        )
    }
}
