//! Resolved styles
//!
//! A [`Style`] is a flat, ordered map of property to final value. It never
//! holds token references; it is what a rendering primitive consumes.
//!
//! # Example
//!
//! ```rust
//! use tessera_style::{Style, StyleKey};
//!
//! let base = Style::new().with(StyleKey::Padding, 10).with(StyleKey::Opacity, 1.0);
//! let pressed = Style::new().with(StyleKey::Opacity, 0.5);
//!
//! let merged = base.merge(&pressed);
//! assert_eq!(merged.get(&StyleKey::Opacity).and_then(|v| v.as_f64()), Some(0.5));
//! assert_eq!(merged.get(&StyleKey::Padding).and_then(|v| v.as_f64()), Some(10.0));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::key::StyleKey;
use crate::value::StyleValue;

/// Flat platform style object
///
/// Only set properties are present. When merging, properties of the later
/// style override those of the earlier one; unset properties never clear
/// anything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    props: IndexMap<StyleKey, StyleValue>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder style)
    pub fn with(mut self, key: impl Into<StyleKey>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a property, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<StyleKey>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.props.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.props.shift_remove(key)
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.props.get(key)
    }

    /// Look a property up by camelCase name
    pub fn get_named(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(&StyleKey::from_name(name))
    }

    pub fn contains(&self, key: &StyleKey) -> bool {
        self.props.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.props.iter()
    }

    /// Merge `other` on top of this style, returning a new one
    pub fn merge(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }

    /// Apply `other` on top of this style in place
    pub fn extend_from(&mut self, other: &Style) {
        for (key, value) in &other.props {
            self.props.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Style
where
    K: Into<StyleKey>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style {
            props: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Style {
    type Item = (StyleKey, StyleValue);
    type IntoIter = indexmap::map::IntoIter<StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_style_wins_and_unset_keeps_earlier() {
        let a = Style::new().with(StyleKey::Padding, 10).with(StyleKey::Margin, 5);
        let b = Style::new().with(StyleKey::Padding, 20);
        let merged = a.merge(&b);
        assert_eq!(merged.get(&StyleKey::Padding), Some(&StyleValue::Int(20)));
        assert_eq!(merged.get(&StyleKey::Margin), Some(&StyleValue::Int(5)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Style::new().with(StyleKey::Padding, 1).with(StyleKey::Margin, 2);
        let b = Style::new().with(StyleKey::Margin, 2).with(StyleKey::Padding, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn named_lookup_uses_known_keys() {
        let style = Style::new().with("paddingTop", 4);
        assert!(style.contains(&StyleKey::PaddingTop));
        assert_eq!(style.get_named("paddingTop"), Some(&StyleValue::Int(4)));
    }
}
