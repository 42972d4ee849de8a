//! Navigation command implementation.
//!
//! `onboardable next` and `onboardable prev` build the flow at the current
//! step, move one step and show where the flow ends up. Moving past either
//! end reports the boundary and exits with code 1.

use crate::cli::args::MoveArgs;
use crate::error::{OnboardingError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;
use super::flow::FlowSource;

/// Which way to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The `next`/`prev` command implementation.
pub struct MoveCommand {
    source: FlowSource,
    direction: Direction,
    args: MoveArgs,
}

impl MoveCommand {
    /// Create a new navigation command.
    pub fn new(source: FlowSource, direction: Direction, args: MoveArgs) -> Self {
        Self {
            source,
            direction,
            args,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Command for MoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let mut sequence = config.build(self.args.current.as_deref())?;
        let moved = match self.direction {
            Direction::Forward => sequence.advance().map(|s| s.to_string()),
            Direction::Backward => sequence.retreat().map(|s| s.to_string()),
        };

        match moved {
            Ok(name) => {
                ui.success(&format!("Moved to {}", name));
                display::show_steps(ui, &sequence);
                ui.show_progress(sequence.progress());
                Ok(CommandResult::success())
            }
            Err(e @ (OnboardingError::LastStep { .. } | OnboardingError::FirstStep { .. })) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
