//! Assembly of steps into a sequence.
//!
//! A [`Builder`] collects named steps in registration order and turns them
//! into a [`Sequence`]. Registering a name twice is not an error: the later
//! step replaces the earlier one in place, and a [`BuilderWarning`] is
//! recorded and logged.
//!
//! # Example
//!
//! ```
//! use onboardable::builder::Builder;
//!
//! let mut builder: Builder = Builder::new();
//! builder.add_step("Create Account").unwrap();
//! builder.add_step("Verify Email").unwrap();
//!
//! let sequence = builder.build(None).unwrap();
//! assert_eq!(sequence.current_step().name().as_str(), "Create Account");
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::error::{OnboardingError, Result};
use crate::sequence::{ProgressFormula, Sequence};
use crate::steps::{Step, StepData, StepName, StepSource};

/// Minimum number of unique steps a builder accepts by default.
pub const DEFAULT_MIN_STEPS: usize = 1;

/// Non-fatal diagnostic produced while registering steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderWarning {
    /// A step replaced an earlier step with the same name.
    Override { name: StepName },
}

impl fmt::Display for BuilderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override { name } => {
                write!(f, "Step `{}` already exists and will be overridden.", name)
            }
        }
    }
}

/// Accumulates steps and builds sequences from them.
#[derive(Debug, Clone)]
pub struct Builder<D = StepData> {
    steps: Vec<Step<D>>,
    default_current: Option<StepName>,
    warnings: Vec<BuilderWarning>,
    min_steps: usize,
    progress: ProgressFormula,
}

impl<D> Default for Builder<D> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            default_current: None,
            warnings: Vec::new(),
            min_steps: DEFAULT_MIN_STEPS,
            progress: ProgressFormula::default(),
        }
    }
}

impl<D: Default> Builder<D> {
    /// Create a builder from a static list of step names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for name in names {
            builder.add_step(name)?;
        }
        Ok(builder)
    }

    /// Register a step with an empty payload.
    pub fn add_step(&mut self, name: impl Into<String>) -> Result<&Step<D>> {
        self.add_step_with(name, D::default())
    }
}

impl<D> Builder<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `progress` for every sequence built from now on.
    pub fn with_progress(mut self, progress: ProgressFormula) -> Self {
        self.progress = progress;
        self
    }

    /// Require at least `min_steps` unique steps at build time.
    pub fn with_min_steps(mut self, min_steps: usize) -> Self {
        self.min_steps = min_steps;
        self
    }

    /// Register a step carrying `data`.
    pub fn add_step_with(&mut self, name: impl Into<String>, data: D) -> Result<&Step<D>> {
        let step = Step::with_data(name, data)?;
        Ok(self.insert(step))
    }

    /// Register the step produced by an external source.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedConversion` if the source provides no conversion.
    /// Returns `StepConversion` if the conversion did not produce a step.
    pub fn add_step_from<S>(&mut self, source: &S) -> Result<&Step<D>>
    where
        S: StepSource<D> + ?Sized,
    {
        let step = match source.to_step() {
            Some(Ok(step)) => step,
            Some(Err(produced)) => {
                return Err(OnboardingError::StepConversion {
                    source_name: source.source_name(),
                    produced,
                })
            }
            None => {
                return Err(OnboardingError::UndefinedConversion {
                    source_name: source.source_name(),
                })
            }
        };
        Ok(self.insert(step))
    }

    /// Register an already constructed step.
    ///
    /// A step whose name is already registered replaces the earlier one at
    /// the earlier one's position. The first name ever registered becomes
    /// the default current step.
    pub fn insert(&mut self, step: Step<D>) -> &Step<D> {
        let index = match self.steps.iter().position(|s| *s == step) {
            Some(index) => {
                let warning = BuilderWarning::Override {
                    name: step.name().clone(),
                };
                warn!("{}", warning);
                self.warnings.push(warning);
                self.steps[index] = step;
                index
            }
            None => {
                if self.default_current.is_none() {
                    self.default_current = Some(step.name().clone());
                }
                self.steps.push(step);
                self.steps.len() - 1
            }
        };
        &self.steps[index]
    }

    /// Build a sequence positioned at `current`, or at the first registered
    /// step when `current` is `None`.
    ///
    /// The builder is left untouched and can build again.
    ///
    /// # Errors
    ///
    /// Returns `EmptyRegistry` if no step was registered.
    /// Returns `InsufficientSteps` if fewer than the minimum were registered.
    /// Returns `InvalidStep` if `current` names an unknown step.
    pub fn build(&self, current: Option<&str>) -> Result<Sequence<D>>
    where
        D: Clone,
    {
        let default_current = match &self.default_current {
            Some(name) if !self.steps.is_empty() => name,
            _ => return Err(OnboardingError::EmptyRegistry),
        };
        if self.steps.len() < self.min_steps {
            return Err(OnboardingError::InsufficientSteps {
                required: self.min_steps,
                found: self.steps.len(),
            });
        }

        let current = current.unwrap_or(default_current.as_str());
        debug!(
            "Building onboarding sequence of {} steps at '{}'",
            self.steps.len(),
            current
        );
        let sequence = Sequence::new(self.steps.iter().cloned(), current)?;
        Ok(sequence.with_progress(self.progress.clone()))
    }

    /// Registered steps in registration order.
    pub fn steps(&self) -> &[Step<D>] {
        &self.steps
    }

    pub fn names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step used when `build` is called without a name.
    pub fn default_step(&self) -> Option<&Step<D>> {
        let name = self.default_current.as_ref()?;
        self.steps.iter().find(|s| s.name() == name)
    }

    /// Diagnostics recorded while registering steps.
    pub fn warnings(&self) -> &[BuilderWarning] {
        &self.warnings
    }

    pub fn min_steps(&self) -> usize {
        self.min_steps
    }

    pub fn progress(&self) -> &ProgressFormula {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ExternalStepProvider;

    impl StepSource for ExternalStepProvider {
        fn to_step(&self) -> crate::steps::Conversion<StepData> {
            let data = json!({ "info": "This is an external step." });
            Some(
                Step::with_data(
                    "external_step",
                    data.as_object().cloned().unwrap_or_default(),
                )
                .map_err(|e| e.to_string()),
            )
        }
    }

    struct NotAStep;

    impl StepSource for NotAStep {
        fn source_name(&self) -> String {
            "NotAStep".to_string()
        }

        fn to_step(&self) -> crate::steps::Conversion<StepData> {
            Some(Err("\"Invalid Step\"".to_string()))
        }
    }

    struct NoConversion;

    impl StepSource for NoConversion {}

    fn payload(value: serde_json::Value) -> StepData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn add_step_registers_name() {
        let mut builder: Builder = Builder::new();
        let step = builder.add_step("intro").unwrap();
        assert_eq!(step.name().as_str(), "intro");
        assert_eq!(builder.names(), vec!["intro"]);
    }

    #[test]
    fn first_added_step_is_default() {
        let mut builder: Builder = Builder::new();
        builder.add_step("intro").unwrap();
        builder.add_step("details").unwrap();
        assert_eq!(builder.default_step().unwrap().name().as_str(), "intro");
    }

    #[test]
    fn duplicate_overrides_payload_and_keeps_position() {
        let mut builder: Builder = Builder::new();
        builder
            .add_step_with("x", payload(json!({ "v": 1 })))
            .unwrap();
        builder.add_step("y").unwrap();
        builder
            .add_step_with("x", payload(json!({ "v": 2 })))
            .unwrap();

        assert_eq!(builder.names(), vec!["x", "y"]);
        assert_eq!(builder.steps()[0].data()["v"], json!(2));
        assert_eq!(
            builder.warnings(),
            &[BuilderWarning::Override {
                name: StepName::new("x").unwrap()
            }]
        );
    }

    #[test]
    fn override_warning_names_the_step() {
        let warning = BuilderWarning::Override {
            name: StepName::new("intro").unwrap(),
        };
        assert_eq!(
            warning.to_string(),
            "Step `intro` already exists and will be overridden."
        );
    }

    #[test]
    fn add_step_rejects_blank_name() {
        let mut builder: Builder = Builder::new();
        let err = builder.add_step("").unwrap_err();
        assert!(matches!(err, OnboardingError::InvalidName { .. }));
        assert!(builder.is_empty());
    }

    #[test]
    fn add_step_from_converts_source() {
        let mut builder: Builder = Builder::new();
        let step = builder.add_step_from(&ExternalStepProvider).unwrap();
        assert_eq!(step.name().as_str(), "external_step");
        assert_eq!(step.data()["info"], json!("This is an external step."));
    }

    #[test]
    fn add_step_from_without_conversion_fails() {
        let mut builder: Builder = Builder::new();
        let err = builder.add_step_from(&NoConversion).unwrap_err();
        match err {
            OnboardingError::UndefinedConversion { source_name } => {
                assert!(source_name.ends_with("NoConversion"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn add_step_from_rejects_non_step() {
        let mut builder: Builder = Builder::new();
        let err = builder.add_step_from(&NotAStep).unwrap_err();
        match err {
            OnboardingError::StepConversion {
                source_name,
                produced,
            } => {
                assert_eq!(source_name, "NotAStep");
                assert_eq!(produced, "\"Invalid Step\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn add_step_from_accepts_trait_objects() {
        let sources: Vec<Box<dyn StepSource>> =
            vec![Box::new(ExternalStepProvider), Box::new(Step::<StepData>::new("own").unwrap())];
        let mut builder: Builder = Builder::new();
        for source in &sources {
            builder.add_step_from(source.as_ref()).unwrap();
        }
        assert_eq!(builder.names(), vec!["external_step", "own"]);
    }

    #[test]
    fn build_without_steps_fails() {
        let builder: Builder = Builder::new();
        let err = builder.build(None).unwrap_err();
        assert!(matches!(err, OnboardingError::EmptyRegistry));
    }

    #[test]
    fn build_defaults_to_first_step() {
        let builder: Builder = Builder::from_names(["step1", "step2"]).unwrap();
        let sequence = builder.build(None).unwrap();
        assert_eq!(sequence.current_step().name().as_str(), "step1");
    }

    #[test]
    fn build_with_named_current_step() {
        let builder: Builder = Builder::from_names(["step1", "step2"]).unwrap();
        let sequence = builder.build(Some("step2")).unwrap();
        assert_eq!(sequence.current_step().name().as_str(), "step2");
        assert!(sequence.steps()[0].is_completed());
    }

    #[test]
    fn build_with_unknown_step_lists_available() {
        let builder: Builder = Builder::from_names(["a", "b"]).unwrap();
        let err = builder.build(Some("nonexistent")).unwrap_err();
        match err {
            OnboardingError::InvalidStep { given, available } => {
                assert_eq!(given, "nonexistent");
                assert_eq!(available, vec!["a", "b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn build_enforces_minimum_step_count() {
        let builder: Builder = Builder::from_names(["a", "a"]).unwrap().with_min_steps(2);
        let err = builder.build(None).unwrap_err();
        assert!(matches!(
            err,
            OnboardingError::InsufficientSteps {
                required: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn build_applies_progress_formula() {
        let builder: Builder = Builder::from_names(["a", "b"])
            .unwrap()
            .with_progress(ProgressFormula::Inclusive);
        let sequence = builder.build(Some("b")).unwrap();
        assert_eq!(sequence.progress(), 100.0);
    }

    #[test]
    fn builder_can_build_repeatedly() {
        let builder: Builder = Builder::from_names(["a", "b"]).unwrap();
        let mut first = builder.build(None).unwrap();
        first.advance().unwrap();

        let second = builder.build(None).unwrap();
        assert_eq!(second.current_step().name().as_str(), "a");
        assert!(builder.steps().iter().all(|s| s.is_pending()));
    }
}
