//! Onboardable - Ordered onboarding flows with a current position.
//!
//! A flow is an ordered set of uniquely named steps. Exactly one step is
//! current; the steps before it are completed and the steps after it are
//! pending. Flows are assembled with a [`Builder`], navigated as a
//! [`Sequence`] and can be described in a `.onboarding.yml` file for the
//! `onboardable` command-line tool.
//!
//! # Modules
//!
//! - [`builder`] - Step registration and sequence construction
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Flow file discovery and parsing
//! - [`error`] - Error types and result aliases
//! - [`host`] - Attaching a flow to a host type
//! - [`sequence`] - Navigation and progress over built flows
//! - [`steps`] - Step names, statuses and conversions
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use onboardable::Builder;
//!
//! let mut builder: Builder = Builder::new();
//! builder.add_step("Create Account").unwrap();
//! builder.add_step("Verify Email").unwrap();
//! builder.add_step("Complete Profile").unwrap();
//!
//! let mut flow = builder.build(None).unwrap();
//! assert!(flow.is_first_step());
//!
//! flow.advance().unwrap();
//! assert_eq!(flow.current_step().name(), "Verify Email");
//! assert!((flow.progress() - 100.0 / 3.0).abs() < 1e-9);
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod sequence;
pub mod steps;
pub mod ui;

pub use builder::{Builder, BuilderWarning};
pub use error::{OnboardingError, Result};
pub use host::{Onboardable, Onboarding};
pub use sequence::{ProgressFormula, Sequence};
pub use steps::{Step, StepData, StepName, StepSource, StepStatus};
