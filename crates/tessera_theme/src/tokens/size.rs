//! Size tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sentinel size token meaning "100% of the parent"
pub const FULL_SIZE_TOKEN: &str = "full";

const DEFAULT_SCALE: [(&str, i32); 14] = [
    ("s0", 0),
    ("s12", 12),
    ("s16", 16),
    ("s20", 20),
    ("s24", 24),
    ("s32", 32),
    ("s40", 40),
    ("s48", 48),
    ("s56", 56),
    ("s64", 64),
    ("s96", 96),
    ("s128", 128),
    ("s160", 160),
    ("s240", 240),
];

/// A resolved size token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeValue {
    /// Fixed size in pixels
    Px(i32),
    /// Fill the parent along the property's axis
    Full,
}

/// Size scale: token name to pixels, plus the `full` sentinel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTokens(FxHashMap<String, i32>);

impl SizeTokens {
    pub fn new(values: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Get size by token name
    pub fn get(&self, name: &str) -> Option<SizeValue> {
        if name == FULL_SIZE_TOKEN {
            return Some(SizeValue::Full);
        }
        self.0.get(name).copied().map(SizeValue::Px)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i32) {
        self.0.insert(name.into(), value);
    }
}

impl Default for SizeTokens {
    fn default() -> Self {
        Self::new(
            DEFAULT_SCALE
                .iter()
                .map(|(name, value)| (name.to_string(), *value)),
        )
    }
}
