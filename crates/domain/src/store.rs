use log::{debug, warn};
use serde::Serialize;

use crate::{Completion, ExerciseDraft, PlanError, Stats, Workout, WorkoutName};

pub const DEFAULT_COPY_SUFFIX: &str = " (copy)";

/// Read-only view of the store returned by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub workouts: &'a [Workout],
    pub stats: Stats,
}

/// Owner of all workouts and, through them, all exercises.
///
/// Every operation either fails without touching the store or applies one
/// edit and recomputes [`Stats`] before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStore {
    workouts: Vec<Workout>,
    stats: Stats,
    copy_suffix: String,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            warn!("failed to {}: {err}", $action);
        }
        result
    }};
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_copy_suffix(DEFAULT_COPY_SUFFIX)
    }

    #[must_use]
    pub fn with_copy_suffix(copy_suffix: impl Into<String>) -> Self {
        Self {
            workouts: Vec::new(),
            stats: Stats::default(),
            copy_suffix: copy_suffix.into(),
        }
    }

    #[must_use]
    pub fn copy_suffix(&self) -> &str {
        &self.copy_suffix
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            workouts: &self.workouts,
            stats: self.stats,
        }
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[must_use]
    pub fn workout(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Append an empty workout. A blank name is ignored.
    pub fn add_workout(&mut self, name: &str) -> Snapshot<'_> {
        match WorkoutName::new(name) {
            Ok(name) => {
                debug!("add workout {name}");
                self.workouts.push(Workout::new(name));
                self.update_stats();
            }
            Err(err) => {
                debug!("ignore workout: {err}");
            }
        }
        self.snapshot()
    }

    pub fn remove_workout(&mut self, index: usize) -> Result<Snapshot<'_>, PlanError> {
        log_on_error!(self.check_workout_index(index), "remove workout")?;
        let workout = self.workouts.remove(index);
        debug!("removed workout {}", workout.name());
        self.update_stats();
        Ok(self.snapshot())
    }

    /// Append a copy of the workout at `index` with all exercises pending.
    pub fn copy_workout(&mut self, index: usize) -> Result<Snapshot<'_>, PlanError> {
        log_on_error!(self.check_workout_index(index), "copy workout")?;
        let copy = self.workouts[index].duplicate(&self.copy_suffix);
        debug!("add workout {}", copy.name());
        self.workouts.push(copy);
        self.update_stats();
        Ok(self.snapshot())
    }

    /// Append a pending exercise built from `draft` to the workout at
    /// `workout_index`. The draft's own target is not consulted.
    pub fn add_exercise(
        &mut self,
        workout_index: usize,
        draft: ExerciseDraft,
    ) -> Result<Snapshot<'_>, PlanError> {
        let workout = log_on_error!(self.workout_mut(workout_index), "add exercise")?;
        workout.push_exercise(draft.commit());
        debug!("add exercise to workout {}", workout.name());
        self.update_stats();
        Ok(self.snapshot())
    }

    pub fn remove_exercise(
        &mut self,
        workout_index: usize,
        exercise_index: usize,
    ) -> Result<Snapshot<'_>, PlanError> {
        let exercise = log_on_error!(
            self.workout_mut(workout_index)
                .and_then(|w| w.remove_exercise(exercise_index)),
            "remove exercise"
        )?;
        debug!("removed exercise {}", exercise.name());
        self.update_stats();
        Ok(self.snapshot())
    }

    /// Switch the exercise between pending and done.
    ///
    /// The completion is stored only when the exercise becomes done; a missing
    /// completion is stored as empty text. Becoming pending clears it.
    pub fn toggle_exercise_done(
        &mut self,
        workout_index: usize,
        exercise_index: usize,
        completion: Option<Completion>,
    ) -> Result<Snapshot<'_>, PlanError> {
        let exercise = log_on_error!(
            self.workout_mut(workout_index)
                .and_then(|w| w.toggle_exercise(exercise_index, completion)),
            "toggle exercise"
        )?;
        debug!(
            "mark exercise {} as {}",
            exercise.name(),
            if exercise.is_done() { "done" } else { "pending" }
        );
        self.update_stats();
        Ok(self.snapshot())
    }

    fn check_workout_index(&self, index: usize) -> Result<(), PlanError> {
        if index < self.workouts.len() {
            Ok(())
        } else {
            Err(PlanError::workout(index, self.workouts.len()))
        }
    }

    fn workout_mut(&mut self, index: usize) -> Result<&mut Workout, PlanError> {
        let len = self.workouts.len();
        self.workouts
            .get_mut(index)
            .ok_or(PlanError::workout(index, len))
    }

    fn update_stats(&mut self) {
        self.stats = Stats::compute(&self.workouts);
    }
}
