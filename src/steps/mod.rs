//! Steps of an onboarding flow.
//!
//! - [`Step`] - A named unit with a payload and a derived status
//! - [`StepName`] - Validated step identifier
//! - [`StepStatus`] - `pending`, `current` or `completed`
//! - [`StepSource`] - Conversion of external objects into steps
//!
//! # Example
//!
//! ```
//! use onboardable::steps::{Step, StepStatus};
//!
//! let step: Step = Step::new("Create Account").unwrap();
//! assert_eq!(step.name().as_str(), "Create Account");
//! assert_eq!(step.status(), StepStatus::Pending);
//! ```

pub mod source;
pub mod step;

pub use source::{Conversion, StepSource};
pub use step::{Step, StepData, StepName, StepStatus};
