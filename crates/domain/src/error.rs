use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("{target} index out of range ({index} >= {len})")]
    IndexOutOfRange {
        target: Target,
        index: usize,
        len: usize,
    },
}

impl PlanError {
    pub(crate) fn workout(index: usize, len: usize) -> Self {
        PlanError::IndexOutOfRange {
            target: Target::Workout,
            index,
            len,
        }
    }

    pub(crate) fn exercise(index: usize, len: usize) -> Self {
        PlanError::IndexOutOfRange {
            target: Target::Exercise,
            index,
            len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Workout,
    Exercise,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Target::Workout => "workout",
                Target::Exercise => "exercise",
            }
        )
    }
}
