use tessera_theme::{ColorGroup, ColorScheme, ThemeError, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["high-contrast", "tessera"]);
}

#[test]
fn preset_ids_round_trip_through_from_str() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
    }
    assert!(matches!(
        "solarized".parse::<ThemePreset>(),
        Err(ThemeError::UnknownPreset(id)) if id == "solarized"
    ));
}

#[test]
fn every_preset_table_validates() {
    for preset in ThemePreset::all() {
        let table = preset.table();
        assert_eq!(table.name(), preset.id());
        table
            .validate()
            .unwrap_or_else(|err| panic!("preset {preset:?} is inconsistent: {err}"));
    }
}

#[test]
fn presets_have_distinct_light_and_dark_surfaces() {
    for preset in ThemePreset::all() {
        let table = preset.table();
        let light = table.for_scheme(ColorScheme::Light);
        let dark = table.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.color(ColorGroup::Background, "base").unwrap(),
            dark.color(ColorGroup::Background, "base").unwrap(),
            "Preset {:?} should have distinct light/dark base backgrounds",
            preset
        );
    }
}

#[test]
fn presets_share_the_default_spacing_scale() {
    for preset in ThemePreset::all() {
        let table = preset.table();
        for scheme in ColorScheme::ALL {
            let theme = table.for_scheme(scheme);
            assert_eq!(theme.spacing("s16").unwrap(), 16, "preset={preset:?} scheme={scheme:?}");
            assert_eq!(theme.radius("md").unwrap(), 8, "preset={preset:?} scheme={scheme:?}");
        }
    }
}
