//! Progress strategies.

use std::fmt;
use std::sync::Arc;

/// Function from `(current_index, step_count)` to a progress value.
pub type ProgressFn = dyn Fn(usize, usize) -> f64 + Send + Sync;

/// How a sequence turns its position into a progress number.
///
/// The formula is evaluated on every call, never cached.
#[derive(Clone, Default)]
pub enum ProgressFormula {
    /// `index / count * 100`: the current step is not counted as done.
    #[default]
    Linear,
    /// `(index + 1) / count * 100`: the current step is counted as done.
    Inclusive,
    /// Caller-supplied formula.
    Custom(Arc<ProgressFn>),
}

impl ProgressFormula {
    /// Wrap a closure as a custom formula.
    pub fn custom<F>(formula: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(formula))
    }

    /// Evaluate the formula for the step at `index` out of `count`.
    pub fn evaluate(&self, index: usize, count: usize) -> f64 {
        match self {
            Self::Linear => percentage(index, count),
            Self::Inclusive => percentage(index + 1, count),
            Self::Custom(formula) => formula(index, count),
        }
    }
}

fn percentage(done: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (done as f64 / count as f64) * 100.0
}

impl fmt::Debug for ProgressFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Inclusive => f.write_str("Inclusive"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_excludes_current_step() {
        let formula = ProgressFormula::Linear;
        assert_eq!(formula.evaluate(0, 4), 0.0);
        assert_eq!(formula.evaluate(2, 4), 50.0);
        assert_eq!(formula.evaluate(3, 4), 75.0);
    }

    #[test]
    fn inclusive_reaches_hundred_at_last_step() {
        let formula = ProgressFormula::Inclusive;
        assert_eq!(formula.evaluate(0, 4), 25.0);
        assert_eq!(formula.evaluate(3, 4), 100.0);
    }

    #[test]
    fn empty_count_is_zero() {
        assert_eq!(ProgressFormula::Linear.evaluate(0, 0), 0.0);
    }

    #[test]
    fn custom_formula_receives_index_and_count() {
        let formula = ProgressFormula::custom(|index, count| (index * 10 + count) as f64);
        assert_eq!(formula.evaluate(2, 5), 25.0);
    }

    #[test]
    fn debug_hides_closure() {
        let formula = ProgressFormula::custom(|_, _| 1.0);
        assert_eq!(format!("{:?}", formula), "Custom(..)");
    }
}
