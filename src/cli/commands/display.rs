//! Shared display helpers for flow output.
//!
//! Used by `status` and the navigation commands to render a sequence
//! consistently.

use serde::Serialize;

use crate::sequence::Sequence;
use crate::steps::{Step, StepData};
use crate::ui::UserInterface;

/// Print every step of the sequence with its status.
pub fn show_steps(ui: &mut dyn UserInterface, sequence: &Sequence) {
    for step in sequence.steps() {
        ui.step(step.name().as_str(), step.status());
    }
}

/// Format a progress value for text output.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// JSON view of a sequence.
#[derive(Debug, Serialize)]
pub struct StatusReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub current: &'a str,
    pub progress: f64,
    pub first: bool,
    pub last: bool,
    pub steps: &'a [Step<StepData>],
}

impl<'a> StatusReport<'a> {
    pub fn new(name: Option<&'a str>, sequence: &'a Sequence) -> Self {
        Self {
            name,
            current: sequence.current_step().name().as_str(),
            progress: sequence.progress(),
            first: sequence.is_first_step(),
            last: sequence.is_last_step(),
            steps: sequence.steps(),
        }
    }
}
