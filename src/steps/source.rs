//! Conversion of external objects into steps.
//!
//! Types that contribute steps to a flow implement [`StepSource`] and are
//! registered with [`Builder::add_step_from`](crate::builder::Builder::add_step_from).

use super::step::{Step, StepData};

/// Outcome of asking a source for its step.
///
/// - `None`: the source does not provide a conversion
/// - `Some(Err(produced))`: the source answered with something that is not
///   a step; `produced` describes what it returned
/// - `Some(Ok(step))`: the converted step
pub type Conversion<D> = Option<Result<Step<D>, String>>;

/// Something that can produce an onboarding step when asked.
pub trait StepSource<D = StepData> {
    /// Identity used in diagnostics and errors.
    fn source_name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Produce the step. The default provides no conversion.
    fn to_step(&self) -> Conversion<D> {
        None
    }
}

impl<D: Clone> StepSource<D> for Step<D> {
    fn source_name(&self) -> String {
        self.name().to_string()
    }

    fn to_step(&self) -> Conversion<D> {
        Some(Ok(self.clone()))
    }
}
