//! Style property names
//!
//! [`StyleKey`] is the closed set of property names the resolver knows how to
//! treat, plus [`StyleKey::Custom`] for any other pass-through property. Each
//! key belongs to a [`PropertyClass`] that decides which token namespace, if
//! any, its value is resolved against.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a property's value is resolved
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PropertyClass {
    /// `theme.spacings`
    Spacing,
    /// `theme.sizes`, with `full` meaning `"100%"`
    Size,
    /// `theme.colors.bg`
    BackgroundColor,
    /// `theme.colors.border`
    BorderColor,
    /// `theme.borderRadius`
    BorderRadius,
    /// `theme.shadows`
    Shadow,
    /// `theme.colors.text`; text elements only
    TextColor,
    /// Copied unchanged
    PassThrough,
}

impl PropertyClass {
    /// Whether values of this class are token names
    pub fn is_token(self) -> bool {
        !matches!(self, PropertyClass::PassThrough)
    }
}

macro_rules! style_keys {
    ($( $class:ident { $( $variant:ident => $name:literal, )* } )*) => {
        /// A style property name
        #[derive(Clone, Debug, Hash, Eq, PartialEq)]
        pub enum StyleKey {
            $( $( $variant, )* )*
            /// Any property without a token dimension
            ///
            /// Build through [`StyleKey::from_name`] so known names never end
            /// up here.
            Custom(String),
        }

        impl StyleKey {
            /// camelCase property name
            pub fn name(&self) -> &str {
                match self {
                    $( $( StyleKey::$variant => $name, )* )*
                    StyleKey::Custom(name) => name,
                }
            }

            pub fn class(&self) -> PropertyClass {
                match self {
                    $( $( StyleKey::$variant => PropertyClass::$class, )* )*
                    StyleKey::Custom(_) => PropertyClass::PassThrough,
                }
            }

            /// Key for a camelCase property name
            pub fn from_name(name: &str) -> Self {
                match name {
                    $( $( $name => StyleKey::$variant, )* )*
                    other => StyleKey::Custom(other.to_string()),
                }
            }
        }
    };
}

style_keys! {
    Spacing {
        Padding => "padding",
        PaddingTop => "paddingTop",
        PaddingBottom => "paddingBottom",
        PaddingLeft => "paddingLeft",
        PaddingRight => "paddingRight",
        PaddingStart => "paddingStart",
        PaddingEnd => "paddingEnd",
        PaddingHorizontal => "paddingHorizontal",
        PaddingVertical => "paddingVertical",
        Margin => "margin",
        MarginTop => "marginTop",
        MarginBottom => "marginBottom",
        MarginLeft => "marginLeft",
        MarginRight => "marginRight",
        MarginStart => "marginStart",
        MarginEnd => "marginEnd",
        MarginHorizontal => "marginHorizontal",
        MarginVertical => "marginVertical",
        Gap => "gap",
        RowGap => "rowGap",
        ColumnGap => "columnGap",
    }
    Size {
        Width => "width",
        Height => "height",
        MinWidth => "minWidth",
        MinHeight => "minHeight",
        MaxWidth => "maxWidth",
        MaxHeight => "maxHeight",
    }
    BackgroundColor {
        BackgroundColor => "backgroundColor",
    }
    BorderColor {
        BorderColor => "borderColor",
        BorderTopColor => "borderTopColor",
        BorderBottomColor => "borderBottomColor",
        BorderLeftColor => "borderLeftColor",
        BorderRightColor => "borderRightColor",
        BorderStartColor => "borderStartColor",
        BorderEndColor => "borderEndColor",
    }
    BorderRadius {
        BorderRadius => "borderRadius",
        BorderTopLeftRadius => "borderTopLeftRadius",
        BorderTopRightRadius => "borderTopRightRadius",
        BorderBottomLeftRadius => "borderBottomLeftRadius",
        BorderBottomRightRadius => "borderBottomRightRadius",
        BorderTopStartRadius => "borderTopStartRadius",
        BorderTopEndRadius => "borderTopEndRadius",
        BorderBottomStartRadius => "borderBottomStartRadius",
        BorderBottomEndRadius => "borderBottomEndRadius",
    }
    Shadow {
        BoxShadow => "boxShadow",
    }
    TextColor {
        Color => "color",
    }
    PassThrough {
        // Flex
        Flex => "flex",
        FlexDirection => "flexDirection",
        FlexGrow => "flexGrow",
        FlexShrink => "flexShrink",
        FlexBasis => "flexBasis",
        FlexWrap => "flexWrap",
        AlignItems => "alignItems",
        AlignSelf => "alignSelf",
        AlignContent => "alignContent",
        JustifyContent => "justifyContent",
        // Position
        Position => "position",
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Start => "start",
        End => "end",
        ZIndex => "zIndex",
        // Box
        AspectRatio => "aspectRatio",
        Transform => "transform",
        Opacity => "opacity",
        Overflow => "overflow",
        Display => "display",
        BorderWidth => "borderWidth",
        BorderTopWidth => "borderTopWidth",
        BorderBottomWidth => "borderBottomWidth",
        BorderLeftWidth => "borderLeftWidth",
        BorderRightWidth => "borderRightWidth",
        BorderStartWidth => "borderStartWidth",
        BorderEndWidth => "borderEndWidth",
        BorderStyle => "borderStyle",
        // Text
        TextAlign => "textAlign",
        TextTransform => "textTransform",
        TextDecorationLine => "textDecorationLine",
        TextDecorationStyle => "textDecorationStyle",
        FontFamily => "fontFamily",
        FontSize => "fontSize",
        FontWeight => "fontWeight",
        FontStyle => "fontStyle",
        LineHeight => "lineHeight",
        LetterSpacing => "letterSpacing",
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for StyleKey {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StyleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for key in [
            StyleKey::PaddingStart,
            StyleKey::BorderBottomEndRadius,
            StyleKey::BoxShadow,
            StyleKey::TextDecorationLine,
        ] {
            assert_eq!(StyleKey::from_name(key.name()), key);
        }
    }

    #[test]
    fn unknown_names_are_custom_pass_through() {
        let key = StyleKey::from_name("backfaceVisibility");
        assert_eq!(key, StyleKey::Custom("backfaceVisibility".to_string()));
        assert_eq!(key.class(), PropertyClass::PassThrough);
    }

    #[test]
    fn classes_follow_property_families() {
        assert_eq!(StyleKey::RowGap.class(), PropertyClass::Spacing);
        assert_eq!(StyleKey::MaxHeight.class(), PropertyClass::Size);
        assert_eq!(StyleKey::BorderEndColor.class(), PropertyClass::BorderColor);
        assert_eq!(StyleKey::Color.class(), PropertyClass::TextColor);
        assert_eq!(StyleKey::Start.class(), PropertyClass::PassThrough);
        assert!(!StyleKey::BorderWidth.class().is_token());
    }
}
