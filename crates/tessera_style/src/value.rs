//! Style values

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tessera_theme::Shadow;

/// Platform box shadow descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub spread_distance: f32,
    pub color: String,
}

impl From<&Shadow> for BoxShadow {
    fn from(shadow: &Shadow) -> Self {
        BoxShadow {
            offset_x: shadow.offset_x,
            offset_y: shadow.offset_y,
            blur_radius: shadow.blur_radius,
            spread_distance: shadow.spread_distance,
            color: shadow.color.clone(),
        }
    }
}

/// A single style property value
///
/// Serialized untagged, so JSON fixtures read naturally:
/// `16`, `0.5`, `"100%"`, `true`, `[{"rotate": "45deg"}]`.
///
/// Pixel tokens resolve to [`StyleValue::Int`]. `Shadows` is never empty: an
/// empty list is always a [`StyleValue::List`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Number(f64),
    Str(String),
    #[serde(deserialize_with = "non_empty_shadows")]
    Shadows(Vec<BoxShadow>),
    List(Vec<StyleValue>),
    Map(IndexMap<String, StyleValue>),
}

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, integers included
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Int(n) => Some(*n as f64),
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StyleValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Int(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<Vec<BoxShadow>> for StyleValue {
    fn from(value: Vec<BoxShadow>) -> Self {
        if value.is_empty() {
            StyleValue::List(Vec::new())
        } else {
            StyleValue::Shadows(value)
        }
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        StyleValue::List(value)
    }
}

fn non_empty_shadows<'de, D>(deserializer: D) -> Result<Vec<BoxShadow>, D::Error>
where
    D: Deserializer<'de>,
{
    let layers = Vec::<BoxShadow>::deserialize(deserializer)?;
    if layers.is_empty() {
        return Err(D::Error::custom("empty shadow list"));
    }
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_arrays_stay_lists() {
        let value: StyleValue = serde_json::from_str("[]").unwrap();
        assert_eq!(value, StyleValue::List(Vec::new()));
        assert_eq!(StyleValue::from(Vec::<BoxShadow>::new()), StyleValue::List(Vec::new()));
    }

    #[test]
    fn shadow_layers_are_recognised() {
        let json = r#"[{
            "offsetX": 0, "offsetY": 1, "blurRadius": 2, "spreadDistance": 0, "color": "black"
        }]"#;
        let value: StyleValue = serde_json::from_str(json).unwrap();
        assert!(matches!(value, StyleValue::Shadows(ref layers) if layers.len() == 1));
    }

    #[test]
    fn whole_and_fractional_numbers_keep_their_shape() {
        assert_eq!(serde_json::from_str::<StyleValue>("16").unwrap(), StyleValue::Int(16));
        assert_eq!(serde_json::from_str::<StyleValue>("0.5").unwrap(), StyleValue::Number(0.5));
        assert_eq!(serde_json::to_string(&StyleValue::from(16)).unwrap(), "16");
        assert_eq!(StyleValue::Int(16).as_f64(), Some(16.0));
    }
}
