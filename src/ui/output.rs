//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Headers, steps and progress.
    #[default]
    Normal,
    /// Step lines and results only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers and the progress bar.
    pub fn shows_decorations(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn decorations_only_in_normal_mode() {
        assert!(OutputMode::Normal.shows_decorations());
        assert!(!OutputMode::Quiet.shows_decorations());
    }
}
