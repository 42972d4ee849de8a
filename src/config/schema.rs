//! Flow configuration schema.
//!
//! These structs map to the YAML flow file format.

use serde::{Deserialize, Serialize};

use crate::builder::{Builder, DEFAULT_MIN_STEPS};
use crate::error::Result;
use crate::sequence::{ProgressFormula, Sequence};
use crate::steps::{Step, StepData};

/// Root configuration structure for a flow file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Display title of the flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Step to start at when none is requested (defaults to the first step)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// Progress formula
    pub progress: ProgressSetting,

    /// Minimum number of unique steps
    pub min_steps: usize,

    /// Steps in flow order
    pub steps: Vec<StepEntry>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            name: None,
            current: None,
            progress: ProgressSetting::default(),
            min_steps: DEFAULT_MIN_STEPS,
            steps: Vec::new(),
        }
    }
}

impl FlowConfig {
    /// Register every configured step with a new builder, in file order.
    pub fn to_builder(&self) -> Result<Builder> {
        let mut builder = Builder::new()
            .with_progress(self.progress.into())
            .with_min_steps(self.min_steps);
        for entry in &self.steps {
            builder.insert(entry.to_step()?);
        }
        Ok(builder)
    }

    /// Build the flow at `current`, falling back to the configured `current`
    /// and then to the first step.
    pub fn build(&self, current: Option<&str>) -> Result<Sequence> {
        self.to_builder()?
            .build(current.or(self.current.as_deref()))
    }

    /// Display title, or `fallback` when the flow is unnamed.
    pub fn title<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// A step in the flow file: a bare name or a name with attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepEntry {
    /// `- create_account`
    Name(String),

    /// `- name: verify_email` followed by arbitrary attributes
    Detailed {
        name: String,
        #[serde(flatten)]
        data: StepData,
    },
}

impl StepEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    /// Convert to a pending step.
    pub fn to_step(&self) -> Result<Step> {
        match self {
            Self::Name(name) => Step::new(name.as_str()),
            Self::Detailed { name, data } => Step::with_data(name.as_str(), data.clone()),
        }
    }
}

/// Named progress formulas selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressSetting {
    /// Current step counts as not done
    #[default]
    Linear,
    /// Current step counts as done
    Inclusive,
}

impl From<ProgressSetting> for ProgressFormula {
    fn from(setting: ProgressSetting) -> Self {
        match setting {
            ProgressSetting::Linear => Self::Linear,
            ProgressSetting::Inclusive => Self::Inclusive,
        }
    }
}
