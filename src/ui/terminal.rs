//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::steps::StepStatus;

use super::{should_use_colors, OnboardingTheme, OutputMode, UserInterface};

/// Terminal UI implementation writing to stdout, with errors on stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: OnboardingTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            OnboardingTheme::new()
        } else {
            OnboardingTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decorations() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn step(&mut self, name: &str, status: StepStatus) {
        writeln!(self.term, "{}", self.theme.format_step(name, status)).ok();
    }

    fn show_progress(&mut self, percent: f64) {
        if self.mode.shows_decorations() {
            writeln!(self.term, "\n{}", self.theme.format_progress(percent)).ok();
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
