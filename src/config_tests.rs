use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_level(), LevelFilter::Info);
    assert_eq!(config.slider_max(), 100.0);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, r#"{ "default_unit": "lbs", "log_level": "debug" }"#).unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.default_unit, WeightUnit::Lbs);
    assert_eq!(config.log_level(), LevelFilter::Debug);
    assert_eq!(config.max_slider_weight, 100.0);
    assert_eq!(config.documents_dir, None);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        AppConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn documents_dir_override_wins() {
    let config = AppConfig {
        documents_dir: Some(PathBuf::from("/tmp/workouts")),
        ..AppConfig::default()
    };
    assert_eq!(config.documents_dir().unwrap(), PathBuf::from("/tmp/workouts"));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = AppConfig {
        log_level: "chatty".to_string(),
        ..AppConfig::default()
    };
    assert_eq!(config.log_level(), LevelFilter::Info);
}

#[test]
fn negative_slider_max_is_clamped() {
    let config = AppConfig {
        max_slider_weight: -5.0,
        ..AppConfig::default()
    };
    assert_eq!(config.slider_max(), 0.0);
}
