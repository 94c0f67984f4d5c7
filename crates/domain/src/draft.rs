use crate::ExerciseFields;

/// Input of the "add exercise" form before it is added to a workout.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub workout_index: Option<usize>,
    pub name: String,
    pub muscle: String,
    pub reps: String,
    pub sets: String,
    pub comment: String,
}

impl ExerciseDraft {
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// An empty draft for adding an exercise to the workout at `workout_index`.
    #[must_use]
    pub fn open(workout_index: usize) -> Self {
        Self {
            workout_index: Some(workout_index),
            ..Self::default()
        }
    }

    /// Take the text fields as entered. Empty fields are accepted.
    #[must_use]
    pub fn commit(self) -> ExerciseFields {
        ExerciseFields {
            name: self.name,
            muscle: self.muscle,
            reps: self.reps,
            sets: self.sets,
            comment: self.comment,
        }
    }
}
