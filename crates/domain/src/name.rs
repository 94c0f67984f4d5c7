use derive_more::{AsRef, Display};
use serde::Serialize;

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkoutName(String);

impl WorkoutName {
    pub fn new(name: &str) -> Result<Self, WorkoutNameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(WorkoutNameError::Empty);
        }

        Ok(WorkoutName(trimmed_name.to_string()))
    }

    /// Append `suffix` verbatim. The result is never empty, so no validation is needed.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        WorkoutName(format!("{}{suffix}", self.0))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutNameError {
    #[error("Name must not be empty")]
    Empty,
}
