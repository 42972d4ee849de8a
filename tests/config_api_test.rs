//! Integration tests for config module public API.

use onboardable::config::{find_config, load_config, FlowConfig, ProgressSetting, StepEntry};
use onboardable::{OnboardingError, StepStatus};
use std::fs;
use tempfile::TempDir;

const FLOW: &str = r#"
name: New hire
current: Verify Email
progress: inclusive
steps:
  - Create Account
  - name: Verify Email
    tooltip: Check your inbox
  - Complete Profile
  - Introduction Tour
"#;

#[test]
fn public_api_is_accessible() {
    let config = FlowConfig::default();
    assert_eq!(config.progress, ProgressSetting::Linear);
    assert_eq!(config.min_steps, 1);
    assert!(config.steps.is_empty());
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".onboarding.yml"), FLOW).unwrap();

    let config = load_config(temp.path(), None).unwrap();
    assert_eq!(config.name.as_deref(), Some("New hire"));
    assert_eq!(
        config.steps[1],
        StepEntry::Detailed {
            name: "Verify Email".to_string(),
            data: serde_json::from_str(r#"{"tooltip": "Check your inbox"}"#).unwrap(),
        }
    );

    let sequence = config.build(None).unwrap();
    assert_eq!(sequence.current_step().name(), "Verify Email");
    assert_eq!(sequence.steps()[0].status(), StepStatus::Completed);
    assert_eq!(sequence.progress(), 50.0);

    let sequence = config.build(Some("Introduction Tour")).unwrap();
    assert!(sequence.is_last_step());
}

#[test]
fn config_is_found_from_a_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".onboarding.yaml"), FLOW).unwrap();
    let nested = temp.path().join("app").join("src");
    fs::create_dir_all(&nested).unwrap();

    let found = find_config(&nested).unwrap();
    assert_eq!(found, temp.path().join(".onboarding.yaml"));

    let config = load_config(&nested, None).unwrap();
    assert_eq!(config.steps.len(), 4);
}

#[test]
fn explicit_config_path_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".onboarding.yml"), FLOW).unwrap();
    let other = temp.path().join("short.yml");
    fs::write(&other, "steps: [one, two]").unwrap();

    let config = load_config(temp.path(), Some(&other)).unwrap();

    assert_eq!(config.build(None).unwrap().names(), vec!["one", "two"]);
}

#[test]
fn missing_config_is_reported() {
    let temp = TempDir::new().unwrap();

    let err = load_config(temp.path(), None).unwrap_err();

    assert!(matches!(err, OnboardingError::ConfigNotFound { .. }));
}

#[test]
fn invalid_yaml_is_reported_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".onboarding.yml");
    fs::write(&path, "steps: {not: [a list").unwrap();

    let err = load_config(temp.path(), None).unwrap_err();

    match err {
        OnboardingError::ConfigParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_flow_cannot_be_built() {
    let config: FlowConfig = serde_yaml::from_str("name: Nothing yet").unwrap();
    assert!(matches!(
        config.build(None),
        Err(OnboardingError::EmptyRegistry)
    ));
}
