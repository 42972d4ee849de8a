//! Terminal output for the command-line front end.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use onboardable::ui::{MockUI, UserInterface};
//! use onboardable::steps::StepStatus;
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Workspace setup");
//! ui.step("Create Account", StepStatus::Current);
//! assert_eq!(ui.steps()[0].1, StepStatus::Current);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, OnboardingTheme};

use crate::steps::StepStatus;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a section header.
    fn show_header(&mut self, title: &str);

    /// Display one step of a flow with its status.
    fn step(&mut self, name: &str, status: StepStatus);

    /// Display progress through a flow, as a percentage.
    fn show_progress(&mut self, percent: f64);
}
