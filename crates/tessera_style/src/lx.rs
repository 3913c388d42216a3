//! Style-intent objects
//!
//! An [`Lx`] is what a component author writes: token names for tokenized
//! properties and literal values for everything else. It is resolved against
//! the active theme by the [`Resolver`](crate::Resolver) and then dropped.
//!
//! ```rust
//! use tessera_style::{Lx, StyleKey};
//!
//! let lx = Lx::new()
//!     .padding("s16")
//!     .bg("surface")
//!     .width("full")
//!     .set(StyleKey::Opacity, 0.9);
//! assert_eq!(lx.len(), 4);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::key::StyleKey;
use crate::value::StyleValue;

/// Flat style-intent object (the `lx` prop)
///
/// Equality is shallow: two intents are equal when they hold the same
/// property/value pairs, regardless of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Lx {
    props: IndexMap<StyleKey, StyleValue>,
}

macro_rules! token_setters {
    ($( $(#[$doc:meta])* $method:ident => $key:ident, )*) => {
        $(
            $(#[$doc])*
            pub fn $method(self, value: impl Into<StyleValue>) -> Self {
                self.set(StyleKey::$key, value)
            }
        )*
    };
}

impl Lx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any property
    pub fn set(mut self, key: impl Into<StyleKey>, value: impl Into<StyleValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a property only when a value is present
    pub fn set_opt(self, key: impl Into<StyleKey>, value: Option<impl Into<StyleValue>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    token_setters! {
        /// Spacing token for all sides
        padding => Padding,
        padding_top => PaddingTop,
        padding_bottom => PaddingBottom,
        padding_start => PaddingStart,
        padding_end => PaddingEnd,
        /// Spacing token for start and end
        padding_x => PaddingHorizontal,
        /// Spacing token for top and bottom
        padding_y => PaddingVertical,
        margin => Margin,
        margin_top => MarginTop,
        margin_bottom => MarginBottom,
        margin_start => MarginStart,
        margin_end => MarginEnd,
        margin_x => MarginHorizontal,
        margin_y => MarginVertical,
        gap => Gap,
        row_gap => RowGap,
        column_gap => ColumnGap,
        /// Size token, or `"full"` for 100%
        width => Width,
        /// Size token, or `"full"` for 100%
        height => Height,
        min_width => MinWidth,
        min_height => MinHeight,
        max_width => MaxWidth,
        max_height => MaxHeight,
        /// Background color role
        bg => BackgroundColor,
        /// Border color role
        border_color => BorderColor,
        /// Border radius token
        rounded => BorderRadius,
        shadow => BoxShadow,
        /// Text color role
        color => Color,
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.props.get(key)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.props.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Lx
where
    K: Into<StyleKey>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Lx {
            props: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Lx {
    /// `null` entries are absent properties and are dropped
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<StyleKey, Option<StyleValue>>::deserialize(deserializer)?;
        Ok(Lx {
            props: raw
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value)))
                .collect(),
        })
    }
}
