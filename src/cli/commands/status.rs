//! Status command implementation.
//!
//! The `onboardable status` command shows every step with its status and
//! the overall progress.

use crate::cli::args::StatusArgs;
use crate::error::{OnboardingError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{self, StatusReport};
use super::flow::{FlowSource, DEFAULT_TITLE};

/// The status command implementation.
pub struct StatusCommand {
    source: FlowSource,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(source: FlowSource, args: StatusArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let sequence = config.build(self.args.current.as_deref())?;

        if self.args.json {
            let report = StatusReport::new(config.name.as_deref(), &sequence);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| OnboardingError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} - Status", config.title(DEFAULT_TITLE)));
        display::show_steps(ui, &sequence);
        ui.show_progress(sequence.progress());

        match sequence.next_step() {
            Some(next) => ui.message(&format!(
                "Step {} of {} ({}). Up next: {}",
                sequence.current_index() + 1,
                sequence.len(),
                display::format_percent(sequence.progress()),
                next
            )),
            None => ui.success(&format!(
                "On the last step: {}",
                sequence.current_step()
            )),
        }

        Ok(CommandResult::success())
    }
}
