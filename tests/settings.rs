use paragram::color_scheme::ColorScheme;
use paragram::config::ParagramConfig;
use paragram::persistence::{load_settings, save_settings, SerColorScheme, SettingsSerde};

#[test]
fn settings_round_trip_through_json_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("settings.json");

    let settings = SettingsSerde {
        color_scheme: SerColorScheme::Light,
        marker_radius: 7.0,
        hit_radius: 12.0,
        label_font_size: 14.0,
    };
    save_settings(&path, &settings).expect("save settings");

    let restored = load_settings(&path).expect("load settings");
    assert_eq!(restored.color_scheme, SerColorScheme::Light);
    assert_eq!(restored.marker_radius, 7.0);
    assert_eq!(restored.hit_radius, 12.0);
    assert_eq!(restored.label_font_size, 14.0);
}

#[test]
fn settings_apply_to_config() {
    let settings = SettingsSerde {
        color_scheme: SerColorScheme::Light,
        marker_radius: 8.0,
        hit_radius: 15.0,
        label_font_size: 11.0,
    };

    let mut cfg = ParagramConfig::default();
    settings.apply_to(&mut cfg);
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert_eq!(cfg.marker_radius, 8.0);
    assert_eq!(cfg.hit_radius, 15.0);
    assert_eq!(cfg.label_font_size, 11.0);
}

#[test]
fn config_captures_into_settings_mirror() {
    let cfg = ParagramConfig::default();
    let settings = SettingsSerde::from(&cfg);
    assert_eq!(settings.color_scheme, SerColorScheme::Dark);
    assert_eq!(settings.marker_radius, cfg.marker_radius);
    assert_eq!(settings.hit_radius, cfg.hit_radius);
}

#[test]
fn corrupt_settings_file_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json at all").expect("write corrupt file");
    assert!(load_settings(&path).is_err());
}

#[test]
fn custom_schemes_fall_back_to_dark_when_persisted() {
    let custom = ColorScheme::Custom(paragram::CustomColorScheme {
        visuals: None,
        colors: ColorScheme::Dark.canvas_colors(),
        label: Some("My scheme".to_string()),
    });
    assert_eq!(SerColorScheme::from(&custom), SerColorScheme::Dark);
}
