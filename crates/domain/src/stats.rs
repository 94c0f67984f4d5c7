use serde::Serialize;

use crate::Workout;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    /// Count all exercises and the done ones across `workouts`.
    ///
    /// Always computed from scratch. The store calls this after every
    /// structural change instead of maintaining counters.
    #[must_use]
    pub fn compute(workouts: &[Workout]) -> Self {
        workouts.iter().fold(Stats::default(), |stats, workout| Stats {
            total: stats.total + workout.num_exercises(),
            completed: stats.completed + workout.num_completed(),
        })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Share of completed exercises, or `None` if there are none at all.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        if self.total == 0 {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(self.completed as f32 / self.total as f32)
        }
    }
}
