use serde::Serialize;

use crate::{Completion, Exercise, ExerciseFields, PlanError, WorkoutName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workout {
    name: WorkoutName,
    exercises: Vec<Exercise>,
}

impl Workout {
    #[must_use]
    pub fn new(name: WorkoutName) -> Self {
        Self {
            name,
            exercises: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &WorkoutName {
        &self.name
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }

    pub fn num_completed(&self) -> usize {
        self.exercises.iter().filter(|e| e.is_done()).count()
    }

    /// A new workout named `<name><suffix>` whose exercises are all pending.
    #[must_use]
    pub fn duplicate(&self, suffix: &str) -> Self {
        Self {
            name: self.name.with_suffix(suffix),
            exercises: self.exercises.iter().map(Exercise::duplicate).collect(),
        }
    }

    pub(crate) fn push_exercise(&mut self, fields: ExerciseFields) {
        self.exercises.push(Exercise::new(fields));
    }

    pub(crate) fn remove_exercise(&mut self, index: usize) -> Result<Exercise, PlanError> {
        self.check_index(index)?;
        Ok(self.exercises.remove(index))
    }

    pub(crate) fn toggle_exercise(
        &mut self,
        index: usize,
        completion: Option<Completion>,
    ) -> Result<&Exercise, PlanError> {
        let len = self.exercises.len();
        let exercise = self
            .exercises
            .get_mut(index)
            .ok_or(PlanError::exercise(index, len))?;
        exercise.toggle(completion);
        Ok(exercise)
    }

    fn check_index(&self, index: usize) -> Result<(), PlanError> {
        if index < self.exercises.len() {
            Ok(())
        } else {
            Err(PlanError::exercise(index, self.exercises.len()))
        }
    }
}
