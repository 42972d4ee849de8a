//! List command implementation.
//!
//! The `onboardable list` command lists the steps of the flow in order.

use crate::cli::args::ListArgs;
use crate::error::{OnboardingError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::flow::{FlowSource, DEFAULT_TITLE};

/// The list command implementation.
pub struct ListCommand {
    source: FlowSource,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(source: FlowSource, args: ListArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        // Registering through the builder applies duplicate resolution
        let names = config.to_builder()?.names();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&names).map_err(|e| OnboardingError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} - Steps", config.title(DEFAULT_TITLE)));
        if names.is_empty() {
            ui.warning("No steps configured");
        }
        for (index, name) in names.iter().enumerate() {
            ui.message(&format!("  {}. {}", index + 1, name));
        }

        Ok(CommandResult::success())
    }
}
