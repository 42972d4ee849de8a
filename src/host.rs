//! Attaching an onboarding flow to a host type.
//!
//! A host owns an [`Onboarding`] (or any [`Builder`]) created when the host
//! is constructed, and exposes it through the [`Onboardable`] trait. Every
//! call to [`Onboardable::onboarding`] builds a fresh [`Sequence`].
//!
//! # Example
//!
//! ```
//! use onboardable::host::{Onboardable, Onboarding};
//!
//! struct Account {
//!     flow: Onboarding,
//! }
//!
//! impl Onboardable for Account {
//!     type Data = onboardable::steps::StepData;
//!
//!     fn onboarding_builder(&self) -> &onboardable::builder::Builder {
//!         self.flow.builder()
//!     }
//! }
//!
//! let account = Account {
//!     flow: Onboarding::from_names(["Create Account", "Verify Email"]).unwrap(),
//! };
//! let sequence = account.onboarding(Some("Verify Email")).unwrap();
//! assert!(sequence.is_last_step());
//! ```

use crate::builder::Builder;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::steps::StepData;

/// A type that carries an onboarding flow.
pub trait Onboardable {
    /// Payload type of the flow's steps.
    type Data: Clone;

    /// The builder holding the flow's configuration.
    fn onboarding_builder(&self) -> &Builder<Self::Data>;

    /// Build the flow, positioned at `current` or at its default step.
    fn onboarding(&self, current: Option<&str>) -> Result<Sequence<Self::Data>> {
        self.onboarding_builder().build(current)
    }
}

/// An owned flow configuration, ready to be held by a host.
#[derive(Debug, Clone)]
pub struct Onboarding<D = StepData> {
    builder: Builder<D>,
}

impl<D> Default for Onboarding<D> {
    fn default() -> Self {
        Self {
            builder: Builder::default(),
        }
    }
}

impl<D: Default> Onboarding<D> {
    /// Declare the flow as a static list of step names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Builder::from_names(names).map(Self::new)
    }
}

impl<D> Onboarding<D> {
    pub fn new(builder: Builder<D>) -> Self {
        Self { builder }
    }

    /// Declare the flow by running a configuration closure against a new
    /// builder.
    pub fn configure<F>(configure: F) -> Result<Self>
    where
        F: FnOnce(&mut Builder<D>) -> Result<()>,
    {
        let mut builder = Builder::new();
        configure(&mut builder)?;
        Ok(Self::new(builder))
    }

    pub fn builder(&self) -> &Builder<D> {
        &self.builder
    }

    pub fn into_builder(self) -> Builder<D> {
        self.builder
    }
}

impl<D: Clone> Onboardable for Onboarding<D> {
    type Data = D;

    fn onboarding_builder(&self) -> &Builder<D> {
        &self.builder
    }
}

impl<D> From<Builder<D>> for Onboarding<D> {
    fn from(builder: Builder<D>) -> Self {
        Self::new(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OnboardingError;
    use serde_json::json;

    struct Dummy {
        flow: Onboarding,
    }

    impl Dummy {
        fn new() -> Self {
            let flow = Onboarding::<StepData>::configure(|b| {
                b.add_step_with(
                    "Create Account",
                    json!({ "tooltip": "Minimum 8 characters." })
                        .as_object()
                        .cloned()
                        .unwrap_or_default(),
                )?;
                b.add_step_with(
                    "Verify Email",
                    json!({ "required": true })
                        .as_object()
                        .cloned()
                        .unwrap_or_default(),
                )?;
                b.add_step("Complete Profile")?;
                b.add_step_with(
                    "Introduction Tour",
                    json!({ "description": "Get to know your new workspace!" })
                        .as_object()
                        .cloned()
                        .unwrap_or_default(),
                )?;
                Ok(())
            })
            .unwrap();
            Self { flow }
        }
    }

    impl Onboardable for Dummy {
        type Data = StepData;

        fn onboarding_builder(&self) -> &Builder {
            self.flow.builder()
        }
    }

    #[test]
    fn host_builds_at_first_step_by_default() {
        let dummy = Dummy::new();
        let sequence = dummy.onboarding(None).unwrap();
        assert_eq!(sequence.current_step().name().as_str(), "Create Account");
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.progress(), 0.0);
    }

    #[test]
    fn host_builds_at_named_step() {
        let dummy = Dummy::new();
        let sequence = dummy.onboarding(Some("Complete Profile")).unwrap();
        assert_eq!(sequence.progress(), 50.0);
        assert_eq!(sequence.current_step().data().len(), 0);
        assert_eq!(
            sequence.prev_step().unwrap().data()["required"],
            json!(true)
        );
    }

    #[test]
    fn every_call_builds_a_fresh_sequence() {
        let dummy = Dummy::new();
        let mut first = dummy.onboarding(None).unwrap();
        first.advance().unwrap();
        let second = dummy.onboarding(None).unwrap();
        assert!(second.is_first_step());
    }

    #[test]
    fn configure_propagates_errors() {
        let err = Onboarding::<StepData>::configure(|b| {
            b.add_step("  ")?;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, OnboardingError::InvalidName { .. }));
    }

    #[test]
    fn onboarding_is_itself_onboardable() {
        let flow: Onboarding = Onboarding::from_names(["a", "b"]).unwrap();
        let sequence = flow.onboarding(Some("b")).unwrap();
        assert!(sequence.is_last_step());
    }
}
