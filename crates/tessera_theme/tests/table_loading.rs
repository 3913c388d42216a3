use pretty_assertions::assert_eq;
use tessera_theme::{
    ColorGroup, ColorScheme, SizeValue, ThemeError, ThemeTable, TokenNamespace, TypographyGroup,
};

const TOML_TABLE: &str = r##"
name = "fixture"

[light]
spacings = { s8 = 8, s16 = 16 }
sizes = { s96 = 96 }
borderRadius = { md = 6 }

[light.colors]
bg = { surface = "#F0F0F0" }
text = { base = "#111111" }
border = { base = "#DDDDDD" }

[[light.shadows.sm]]
offsetX = 0
offsetY = 1
blurRadius = 2
color = "rgba(0, 0, 0, 0.1)"

[light.typographies.xs.body.body1]
fontSize = 16
fontWeight = "400"
lineHeight = 24

[dark]
spacings = { s8 = 8, s16 = 16 }
sizes = { s96 = 96 }
borderRadius = { md = 6 }

[dark.colors]
bg = { surface = "#1C1C1F" }
text = { base = "#FAFAFA" }
border = { base = "#3F3F46" }

[[dark.shadows.sm]]
offsetX = 0
offsetY = 1
blurRadius = 2
spreadDistance = 1
color = "rgba(0, 0, 0, 0.4)"

[dark.typographies.xs.body.body1]
fontSize = 16
fontWeight = "400"
lineHeight = 24
"##;

#[test]
fn toml_table_loads_every_namespace() {
    let table = ThemeTable::from_toml_str(TOML_TABLE).unwrap();
    assert_eq!(table.name(), "fixture");

    let light = table.for_scheme(ColorScheme::Light);
    assert_eq!(light.color_scheme(), ColorScheme::Light);
    assert_eq!(light.spacing("s16").unwrap(), 16);
    assert_eq!(light.size("s96").unwrap(), SizeValue::Px(96));
    assert_eq!(light.size("full").unwrap(), SizeValue::Full);
    assert_eq!(light.radius("md").unwrap(), 6);
    assert_eq!(light.color(ColorGroup::Background, "surface").unwrap(), "#F0F0F0");

    let shadow = light.shadow("sm").unwrap();
    assert_eq!(shadow.len(), 1);
    assert_eq!(shadow[0].blur_radius, 2.0);
    assert_eq!(shadow[0].spread_distance, 0.0);

    let body = light
        .typography("xs", TypographyGroup::Body, "body1")
        .unwrap();
    assert_eq!(body.font_size, 16.0);
    assert_eq!(body.letter_spacing, 0.0);

    let dark = table.for_scheme(ColorScheme::Dark);
    assert_eq!(dark.color(ColorGroup::Background, "surface").unwrap(), "#1C1C1F");
}

#[test]
fn json_table_with_mismatched_schemes_is_rejected() {
    let json = r##"{
        "light": { "colors": { "bg": { "surface": "#FFF", "accent": "#00F" }, "text": {}, "border": {} } },
        "dark": { "colors": { "bg": { "surface": "#000" }, "text": {}, "border": {} } }
    }"##;
    match ThemeTable::from_json_str(json) {
        Err(ThemeError::SchemeMismatch {
            namespace,
            token,
            present,
            missing,
        }) => {
            assert_eq!(namespace, TokenNamespace::BackgroundColor);
            assert_eq!(token, "accent");
            assert_eq!(present, ColorScheme::Light);
            assert_eq!(missing, ColorScheme::Dark);
        }
        other => panic!("expected a scheme mismatch, got {other:?}"),
    }
}

#[test]
fn misspelled_namespace_is_rejected() {
    let toml = TOML_TABLE.replace("spacings = { s8", "spacing = { s8");
    let err = ThemeTable::from_toml_str(&toml).unwrap_err();
    assert!(matches!(err, ThemeError::Toml(_)), "got {err:?}");
    assert!(err.to_string().contains("spacing"), "got {err}");
}

#[test]
fn misspelled_color_group_is_rejected() {
    let json = r##"{
        "light": { "colors": { "bg": {}, "text": {}, "border": {}, "borders": {} } },
        "dark": { "colors": { "bg": {}, "text": {}, "border": {} } }
    }"##;
    let err = ThemeTable::from_json_str(json).unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)), "got {err:?}");
}

#[test]
fn json_table_without_colors_is_a_parse_error() {
    let err = ThemeTable::from_json_str(r#"{ "light": {}, "dark": {} }"#).unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)), "got {err:?}");
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("tessera_theme_fixture.yaml");
    std::fs::write(&path, "light: {}").unwrap();
    let err = ThemeTable::from_path(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ThemeError::UnsupportedFormat(_)), "got {err:?}");
}

#[test]
fn toml_file_loads_from_path() {
    let path = std::env::temp_dir().join("tessera_theme_fixture.toml");
    std::fs::write(&path, TOML_TABLE).unwrap();
    let table = ThemeTable::from_path(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(table.unwrap().name(), "fixture");
}
