//! Visual theme and styling.

use console::Style;

use crate::steps::StepStatus;

/// Visual theme for flow output.
#[derive(Debug, Clone)]
pub struct OnboardingTheme {
    /// Style for success messages and completed steps (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the current step (magenta bold).
    pub current: Style,
    /// Style for dim/secondary text and pending steps.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for OnboardingTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            current: Style::new().magenta().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            current: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("◆"), self.highlight.apply_to(title))
    }

    /// Format a step line: status icon and name, styled by status.
    pub fn format_step(&self, name: &str, status: StepStatus) -> String {
        let style = match status {
            StepStatus::Completed => &self.success,
            StepStatus::Current => &self.current,
            StepStatus::Pending => &self.dim,
        };
        format!("  {}", style.apply_to(format!("{} {}", status_icon(status), name)))
    }

    /// Format a progress bar followed by the percentage.
    pub fn format_progress(&self, percent: f64) -> String {
        let clamped = percent.clamp(0.0, 100.0);
        let filled = ((clamped / 100.0) * 16.0).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(16 - filled));
        format!(
            "  {} {}",
            self.current.apply_to(format!("[{}]", bar)),
            self.dim.apply_to(format!("{:.0}%", percent))
        )
    }
}

/// Icon for a step status (TTY output).
pub fn status_icon(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "✓",
        StepStatus::Current => "▸",
        StepStatus::Pending => "◌",
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
