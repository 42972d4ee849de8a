//! Ordered steps with a current-position pointer.
//!
//! A [`Sequence`] owns a non-empty list of uniquely named steps and the index
//! of the current one. Every move recomputes the status of every step, so
//! steps before the pointer are `completed`, the pointed step is `current`
//! and the rest are `pending`. A failed move changes nothing.
//!
//! # Example
//!
//! ```
//! use onboardable::sequence::Sequence;
//! use onboardable::steps::Step;
//!
//! let steps: Vec<Step> = ["a", "b", "c"]
//!     .into_iter()
//!     .map(|name| Step::new(name).unwrap())
//!     .collect();
//!
//! let mut sequence = Sequence::new(steps, "b").unwrap();
//! assert_eq!(sequence.next_step().unwrap().name().as_str(), "c");
//! assert_eq!(sequence.advance().unwrap().name().as_str(), "c");
//! assert!(sequence.is_last_step());
//! ```

pub mod progress;

pub use progress::{ProgressFn, ProgressFormula};

use tracing::{debug, warn};

use crate::error::{OnboardingError, Result};
use crate::steps::{Step, StepData};

/// Ordered, deduplicated steps plus the current-step pointer.
#[derive(Debug, Clone)]
pub struct Sequence<D = StepData> {
    steps: Vec<Step<D>>,
    current: usize,
    progress: ProgressFormula,
}

impl<D> Sequence<D> {
    /// Create a sequence positioned at the step named `current`.
    ///
    /// Later steps sharing a name with an earlier one are dropped.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if `steps` is empty.
    /// Returns `InvalidStep` if no step is named `current`.
    pub fn new(steps: impl IntoIterator<Item = Step<D>>, current: &str) -> Result<Self> {
        let steps = unique_steps(steps);
        if steps.is_empty() {
            return Err(OnboardingError::EmptySequence);
        }

        let mut sequence = Self {
            steps,
            current: 0,
            progress: ProgressFormula::default(),
        };
        let index = sequence.index_of(current)?;
        sequence.reposition(index)?;
        Ok(sequence)
    }

    /// Replace the progress strategy.
    pub fn with_progress(mut self, progress: ProgressFormula) -> Self {
        self.progress = progress;
        self
    }

    pub fn steps(&self) -> &[Step<D>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a sequence holds at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of all steps, in order.
    pub fn names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }

    /// Look up a step by name. Surrounding whitespace is ignored, as it is
    /// when a step is named.
    pub fn step(&self, name: &str) -> Option<&Step<D>> {
        let name = name.trim();
        self.steps.iter().find(|s| s.name() == name)
    }

    pub fn current_step(&self) -> &Step<D> {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The step after the current one, or `None` at the last step.
    pub fn next_step(&self) -> Option<&Step<D>> {
        self.steps.get(self.current + 1)
    }

    /// The step before the current one, or `None` at the first step.
    pub fn prev_step(&self) -> Option<&Step<D>> {
        self.current
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
    }

    pub fn first_step(&self) -> &Step<D> {
        &self.steps[0]
    }

    pub fn last_step(&self) -> &Step<D> {
        &self.steps[self.steps.len() - 1]
    }

    pub fn is_first_step(&self) -> bool {
        self.is_first(self.current_step())
    }

    pub fn is_last_step(&self) -> bool {
        self.is_last(self.current_step())
    }

    /// Whether `step` is the first step (compared by name).
    pub fn is_first(&self, step: &Step<D>) -> bool {
        step == self.first_step()
    }

    /// Whether `step` is the last step (compared by name).
    pub fn is_last(&self, step: &Step<D>) -> bool {
        step == self.last_step()
    }

    /// Progress at the current position, using the configured formula.
    pub fn progress(&self) -> f64 {
        self.progress.evaluate(self.current, self.steps.len())
    }

    /// Progress at the current position, using a one-off formula.
    pub fn progress_with<F>(&self, formula: F) -> f64
    where
        F: Fn(usize, usize) -> f64,
    {
        formula(self.current, self.steps.len())
    }

    /// Move to the next step and return it.
    ///
    /// # Errors
    ///
    /// Returns `LastStep` when the current step is the last one.
    pub fn advance(&mut self) -> Result<&Step<D>> {
        if self.next_step().is_none() {
            return Err(OnboardingError::LastStep {
                step: self.current_step().name().to_string(),
                available: self.names(),
            });
        }

        self.reposition(self.current + 1)?;
        debug!("Advanced to step '{}'", self.current_step());
        Ok(self.current_step())
    }

    /// Move to the previous step and return it.
    ///
    /// # Errors
    ///
    /// Returns `FirstStep` when the current step is the first one.
    pub fn retreat(&mut self) -> Result<&Step<D>> {
        if self.prev_step().is_none() {
            return Err(OnboardingError::FirstStep {
                step: self.current_step().name().to_string(),
                available: self.names(),
            });
        }

        self.reposition(self.current - 1)?;
        debug!("Retreated to step '{}'", self.current_step());
        Ok(self.current_step())
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        let trimmed = name.trim();
        self.steps
            .iter()
            .position(|s| s.name() == trimmed)
            .ok_or_else(|| OnboardingError::InvalidStep {
                given: name.to_string(),
                available: self.names(),
            })
    }

    /// Point at `target` and recompute every status.
    fn reposition(&mut self, target: usize) -> Result<()> {
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.update_status(index.cmp(&target) as i32)?;
        }
        self.current = target;
        Ok(())
    }
}

fn unique_steps<D>(steps: impl IntoIterator<Item = Step<D>>) -> Vec<Step<D>> {
    let mut result: Vec<Step<D>> = Vec::new();
    for step in steps {
        if result.contains(&step) {
            warn!("Step '{}' appears more than once; keeping the first", step);
            continue;
        }
        result.push(step);
    }
    result
}
