use super::*;
use crate::schema::{BackgroundMode, FolioConfig};

#[test]
fn default_template_parses_to_default_config() {
    let content = default_config_toml();
    let config: FolioConfig = toml::from_str(&content).unwrap();
    let default = FolioConfig::default();
    assert_eq!(config.theme.name, default.theme.name);
    assert_eq!(config.starfield.points, default.starfield.points);
    assert_eq!(config.hud.blink_interval_secs, default.hud.blink_interval_secs);
}

#[test]
fn load_from_path_reads_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[starfield]
points = 100
radius = 2.0

[background]
mode = "solid"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.starfield.points, 100);
    assert!((config.starfield.radius - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.background.mode, BackgroundMode::Solid);
    // Defaults preserved
    assert_eq!(config.theme.name, "folio-dark");
}

#[test]
fn load_from_path_missing_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn load_from_path_invalid_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "starfield = [not toml").unwrap();
    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse TOML"));
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[starfield]"));
    assert!(written.contains("folio-dark"));
    // The template must itself load cleanly
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.starfield.points, 5000);
}
