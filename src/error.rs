//! Error types for onboarding flows.
//!
//! This module defines [`OnboardingError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is a programmer or configuration error; none is retryable
//! - Errors propagate unmodified to the caller
//! - Duplicate step names are not errors: they are logged and overridden

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for onboarding operations.
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// A sequence was constructed without any steps.
    #[error("Cannot be performed because the sequence is empty")]
    EmptySequence,

    /// A builder was asked to build before any step was added.
    #[error("Cannot build an onboarding flow without steps")]
    EmptyRegistry,

    /// Fewer unique steps than the configured minimum.
    #[error("Onboarding flow needs at least {required} unique steps, found {found}")]
    InsufficientSteps { required: usize, found: usize },

    /// A step name that is not part of the sequence.
    #[error("Invalid step: `{given}`. Must be one of: `{}`", .available.join("`, `"))]
    InvalidStep {
        given: String,
        available: Vec<String>,
    },

    /// A three-way comparison outside of -1, 0 and 1 reached a status update.
    #[error("Invalid comparison result: `{value}`. Must be one of: `-1`, `0`, `1`")]
    InvalidComparison { value: i32 },

    /// Attempted to advance past the last step.
    #[error("`{step}` is the last step. Available steps are: `{}`", .available.join("`, `"))]
    LastStep {
        step: String,
        available: Vec<String>,
    },

    /// Attempted to retreat before the first step.
    #[error("`{step}` is the first step. Available steps are: `{}`", .available.join("`, `"))]
    FirstStep {
        step: String,
        available: Vec<String>,
    },

    /// A step source without a conversion to a step.
    #[error("`{source_name}` does not provide a conversion to an onboarding step")]
    UndefinedConversion { source_name: String },

    /// A step source whose conversion produced something other than a step.
    #[error("`{source_name}` was converted to `{produced}`, which is not an onboarding step")]
    StepConversion {
        source_name: String,
        produced: String,
    },

    /// A step name that cannot be used as an identifier.
    #[error("Invalid step name: {name:?}")]
    InvalidName { name: String },

    /// Flow configuration not found at the expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a flow configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for onboarding operations.
pub type Result<T> = std::result::Result<T, OnboardingError>;
