//! Shadow tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Ordered shadow layers of one shadow token
pub type ShadowLayers = SmallVec<[Shadow; 2]>;

/// A single box shadow layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    #[serde(default)]
    pub spread_distance: f32,
    pub color: String,
}

impl Shadow {
    pub fn new(
        offset_x: f32,
        offset_y: f32,
        blur_radius: f32,
        spread_distance: f32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            spread_distance,
            color: color.into(),
        }
    }
}

/// Shadow scale: token name to ordered layers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadowTokens(FxHashMap<String, ShadowLayers>);

impl ShadowTokens {
    pub fn new(values: impl IntoIterator<Item = (String, ShadowLayers)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Get shadow layers by token name
    pub fn get(&self, name: &str) -> Option<&[Shadow]> {
        self.0.get(name).map(|layers| layers.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, layers: ShadowLayers) {
        self.0.insert(name.into(), layers);
    }

    /// Create shadow tokens for a light color scheme
    pub fn light() -> Self {
        Self::with_alphas(0.06, 0.1, 0.14)
    }

    /// Create shadow tokens for a dark color scheme
    pub fn dark() -> Self {
        Self::with_alphas(0.3, 0.4, 0.5)
    }

    fn with_alphas(sm: f32, md: f32, lg: f32) -> Self {
        let black = |alpha: f32| format!("rgba(0, 0, 0, {alpha})");
        Self::new([
            ("none".to_string(), SmallVec::new()),
            (
                "sm".to_string(),
                smallvec![Shadow::new(0.0, 1.0, 2.0, 0.0, black(sm))],
            ),
            (
                "md".to_string(),
                smallvec![
                    Shadow::new(0.0, 4.0, 6.0, -1.0, black(md)),
                    Shadow::new(0.0, 2.0, 4.0, -2.0, black(sm)),
                ],
            ),
            (
                "lg".to_string(),
                smallvec![
                    Shadow::new(0.0, 10.0, 15.0, -3.0, black(lg)),
                    Shadow::new(0.0, 4.0, 6.0, -4.0, black(md)),
                ],
            ),
        ])
    }
}
