//! Flow file discovery and loading.

use crate::config::schema::FlowConfig;
use crate::error::{OnboardingError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names recognised as a flow file, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".onboarding.yml", ".onboarding.yaml"];

/// Find the flow file by walking up from `start`.
///
/// # Returns
///
/// The path to the nearest flow file, or None if not found.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Move up one directory
        if !current.pop() {
            return None;
        }
    }
}

/// Load a single flow file and parse it into FlowConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FlowConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OnboardingError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OnboardingError::Io(e)
        }
    })?;

    tracing::debug!("Loaded flow file {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into FlowConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<FlowConfig> {
    serde_yaml::from_str(content).map_err(|e| OnboardingError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the flow file with optional path override.
///
/// If `config_override` is provided, loads only that file. Otherwise the
/// nearest flow file at or above `project_root` is used.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<FlowConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_config(project_root) {
        Some(path) => load_config_file(&path),
        None => Err(OnboardingError::ConfigNotFound {
            path: project_root.join(CONFIG_FILE_NAMES[0]),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_start_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".onboarding.yml"), "steps: [a]").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, temp.path().join(".onboarding.yml"));
    }

    #[test]
    fn find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".onboarding.yaml"), "steps: [a]").unwrap();
        let nested = temp.path().join("app").join("src");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, temp.path().join(".onboarding.yaml"));
    }

    #[test]
    fn load_config_file_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("missing.yml"));
        assert!(matches!(result, Err(OnboardingError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_file_parses_steps() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("flow.yml");
        fs::write(&path, "name: Test\nsteps: [a, b]").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("Test"));
        assert_eq!(config.steps.len(), 2);
    }

    #[test]
    fn parse_config_reports_invalid_yaml() {
        let result = parse_config("steps: [unclosed", Path::new("/flow.yml"));
        match result {
            Err(OnboardingError::ConfigParseError { path, message }) => {
                assert_eq!(path, PathBuf::from("/flow.yml"));
                assert!(!message.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_config_prefers_override() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".onboarding.yml"), "steps: [discovered]").unwrap();
        let override_path = temp.path().join("custom.yml");
        fs::write(&override_path, "steps: [custom]").unwrap();

        let config = load_config(temp.path(), Some(&override_path)).unwrap();
        assert_eq!(config.steps[0].name(), "custom");
    }

    #[test]
    fn load_config_without_file_reports_default_path() {
        let temp = TempDir::new().unwrap();
        match load_config(temp.path(), None) {
            Err(OnboardingError::ConfigNotFound { path }) => {
                assert_eq!(path, temp.path().join(".onboarding.yml"));
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }
}
