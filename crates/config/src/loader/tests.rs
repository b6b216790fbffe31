//! Unit tests for the tour loader.

use serial_test::serial;

use super::builder::TourLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::{DEFAULT_HIGHLIGHT_PADDING, ENV_HIGHLIGHT_PADDING, ENV_THEME};
use crate::test_util::global_test_lock;
use crate::types::{ColorTheme, StepSpec};

fn sample_steps() -> Vec<StepSpec> {
    vec![
        StepSpec::untargeted("Welcome", "Start here"),
        StepSpec::targeted("Menu", "The main menu", "data-first"),
    ]
}

#[test]
fn test_build_with_fallback_steps_uses_defaults() {
    let tour = TourLoader::new().with_steps(sample_steps()).build().unwrap();
    assert_eq!(tour.steps.len(), 2);
    assert_eq!(tour.settings.highlight_padding, DEFAULT_HIGHLIGHT_PADDING);
}

#[test]
fn test_build_without_steps_is_empty_tour() {
    let err = TourLoader::new().build().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyTour));
}

#[test]
fn test_blank_title_rejected_with_index() {
    let steps = vec![
        StepSpec::untargeted("Ok", "fine"),
        StepSpec::untargeted("   ", "blank"),
    ];
    let err = TourLoader::new().with_steps(steps).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStep { index: 1, .. }));
}

#[test]
fn test_blank_selector_rejected() {
    let steps = vec![StepSpec::targeted("Ok", "fine", " ")];
    let err = TourLoader::new().with_steps(steps).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStep { index: 0, .. }));
}

#[test]
fn test_padding_out_of_range_rejected() {
    let err = TourLoader::new()
        .with_steps(sample_steps())
        .with_highlight_padding(-1)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSettings { .. }));
}

#[test]
#[serial]
fn test_env_padding_override() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_HIGHLIGHT_PADDING, Some("3"))], || {
        let tour = TourLoader::new()
            .with_steps(sample_steps())
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tour.settings.highlight_padding, 3);
    });
}

#[test]
#[serial]
fn test_explicit_override_beats_env() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_HIGHLIGHT_PADDING, Some("3"))], || {
        let tour = TourLoader::new()
            .with_steps(sample_steps())
            .with_highlight_padding(2)
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tour.settings.highlight_padding, 2);
    });
}

#[test]
#[serial]
fn test_env_invalid_padding_reports_variable() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_HIGHLIGHT_PADDING, Some("wide"))], || {
        let err = TourLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, ENV_HIGHLIGHT_PADDING),
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_env_theme_override() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("monochrome"))], || {
        let tour = TourLoader::new()
            .with_steps(sample_steps())
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tour.settings.theme, ColorTheme::Monochrome);
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_HIGHLIGHT_PADDING, Some("   "))], || {
        assert_eq!(env_var_or_none(ENV_HIGHLIGHT_PADDING), None);
        let tour = TourLoader::new()
            .with_steps(sample_steps())
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tour.settings.highlight_padding, DEFAULT_HIGHLIGHT_PADDING);
    });
}

#[test]
#[serial]
fn test_env_var_value_is_trimmed() {
    let _lock = global_test_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("  light  "))], || {
        assert_eq!(env_var_or_none(ENV_THEME), Some("light".to_string()));
    });
}
