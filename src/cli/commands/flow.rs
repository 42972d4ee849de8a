//! Loading the flow file for a command.

use std::path::{Path, PathBuf};

use crate::config::{load_config, FlowConfig};
use crate::error::{OnboardingError, Result};
use crate::ui::UserInterface;

/// Title used when the flow file does not name the flow.
pub const DEFAULT_TITLE: &str = "Onboarding";

/// Where a command reads its flow from.
#[derive(Debug, Clone)]
pub struct FlowSource {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl FlowSource {
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the flow file.
    ///
    /// Returns `None` after reporting to the UI when no flow file exists.
    pub fn load(&self, ui: &mut dyn UserInterface) -> Result<Option<FlowConfig>> {
        match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(config) => Ok(Some(config)),
            Err(OnboardingError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No onboarding flow found at {}. Create .onboarding.yml first.",
                    path.display()
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
