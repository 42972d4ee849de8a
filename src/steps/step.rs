//! Step identity, payload and derived status.
//!
//! A [`Step`] is created `pending` and only ever changes status when the
//! owning [`Sequence`](crate::sequence::Sequence) moves its pointer.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OnboardingError, Result};

/// Default payload attached to a step: a map of arbitrary attributes.
pub type StepData = serde_json::Map<String, serde_json::Value>;

/// Identifier of a step, unique within a sequence.
///
/// Surrounding whitespace is trimmed; a blank name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StepName(String);

impl StepName {
    /// Validate and wrap a step name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OnboardingError::InvalidName { name: raw });
        }
        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StepName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StepName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for StepName {
    type Error = OnboardingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StepName {
    type Error = OnboardingError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for StepName {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<StepName> for String {
    fn from(name: StepName) -> Self {
        name.0
    }
}

/// Position of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Not reached yet.
    #[default]
    Pending,
    /// The step the sequence points at.
    Current,
    /// Before the current step.
    Completed,
}

impl StepStatus {
    /// Map a three-way comparison of a step index against the current index.
    ///
    /// `-1` (before) is completed, `0` is current, `1` (after) is pending.
    pub fn from_comparison(comparison: i32) -> Result<Self> {
        match comparison {
            -1 => Ok(Self::Completed),
            0 => Ok(Self::Current),
            1 => Ok(Self::Pending),
            value => Err(OnboardingError::InvalidComparison { value }),
        }
    }

    /// Lowercase label used in text and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Current => "current",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named unit of an onboarding flow.
///
/// Equality compares names only; payload and status are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct Step<D = StepData> {
    name: StepName,
    status: StepStatus,
    data: D,
}

impl<D: Default> Step<D> {
    /// Create a pending step with an empty payload.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_data(name, D::default())
    }
}

impl<D> Step<D> {
    /// Create a pending step carrying `data`.
    pub fn with_data(name: impl Into<String>, data: D) -> Result<Self> {
        Ok(Self::from_name(StepName::new(name)?, data))
    }

    /// Create a pending step from an already validated name.
    pub fn from_name(name: StepName, data: D) -> Self {
        Self {
            name,
            status: StepStatus::default(),
            data,
        }
    }

    pub fn name(&self) -> &StepName {
        &self.name
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == StepStatus::Pending
    }

    pub fn is_current(&self) -> bool {
        self.status == StepStatus::Current
    }

    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }

    /// Reassign the status from a three-way comparison with the current index.
    ///
    /// Leaves the status untouched when `comparison` is out of range.
    pub(crate) fn update_status(&mut self, comparison: i32) -> Result<StepStatus> {
        self.status = StepStatus::from_comparison(comparison)?;
        Ok(self.status)
    }
}

impl<D> PartialEq for Step<D> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<D> Eq for Step<D> {}

impl<D> fmt::Display for Step<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}
