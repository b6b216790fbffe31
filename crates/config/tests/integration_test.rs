//! Integration tests for loading tour files from disk.

use std::io::Write;

use serial_test::serial;
use tempfile::{Builder, NamedTempFile};
use tour_config::constants::ENV_PANEL_WIDTH;
use tour_config::{ColorTheme, ConfigError, TourLoader, read_tour_file};

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_json_tour_file() {
    let file = write_temp(
        ".json",
        r#"{
            "settings": { "highlight_padding": 2, "theme": "light" },
            "steps": [
                { "title": "Hello", "body": "Welcome aboard" },
                { "title": "Menu", "body": "Main menu", "target": "data-first" }
            ]
        }"#,
    );

    let tour = TourLoader::new()
        .with_path(file.path())
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(tour.steps.len(), 2);
    assert_eq!(tour.steps[1].target.as_deref(), Some("data-first"));
    assert_eq!(tour.settings.highlight_padding, 2);
    assert_eq!(tour.settings.theme, ColorTheme::Light);
}

#[test]
fn test_load_yaml_tour_file() {
    let file = write_temp(
        ".yaml",
        "steps:\n  - title: Hello\n    body: Welcome\n  - title: Search\n    body: Find things\n    target: data-second\n",
    );

    let tour = read_tour_file(file.path()).unwrap();
    assert_eq!(tour.steps[0].title, "Hello");
    assert_eq!(tour.steps[1].target.as_deref(), Some("data-second"));
}

#[test]
fn test_file_steps_replace_fallback_steps() {
    let file = write_temp(".json", r#"{"steps":[{"title":"From file","body":"x"}]}"#);
    let tour = TourLoader::new()
        .with_steps(vec![tour_config::StepSpec::untargeted("Fallback", "y")])
        .with_path(file.path())
        .from_file()
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tour.steps.len(), 1);
    assert_eq!(tour.steps[0].title, "From file");
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "steps = []");
    let err = read_tour_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = read_tour_file(&path).unwrap_err();
    match err {
        ConfigError::FileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_temp(".json", r#"{"steps": [ {"title": "A" "#);
    let err = read_tour_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileParse { .. }));
}

#[test]
fn test_unknown_settings_field_is_parse_error() {
    let file = write_temp(
        ".json",
        r#"{"settings":{"padding":3},"steps":[{"title":"A","body":"a"}]}"#,
    );
    let err = read_tour_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileParse { .. }));
}

#[test]
#[serial]
fn test_env_overrides_file_settings() {
    let file = write_temp(
        ".json",
        r#"{"settings":{"panel_width":30},"steps":[{"title":"A","body":"a"}]}"#,
    );
    temp_env::with_vars([(ENV_PANEL_WIDTH, Some("50"))], || {
        let tour = TourLoader::new()
            .with_path(file.path())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tour.settings.panel_width, 50);
    });
}

#[test]
fn test_panel_too_small_rejected() {
    let file = write_temp(
        ".json",
        r#"{"settings":{"panel_height":2},"steps":[{"title":"A","body":"a"}]}"#,
    );
    let err = TourLoader::new()
        .with_path(file.path())
        .from_file()
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSettings { .. }));
}
