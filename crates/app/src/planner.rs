use log::{debug, warn};
use planner_domain::{ExerciseDraft, PlanError, PlanStore, Snapshot, Target};

use crate::Settings;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("no exercise draft is open")]
    NoOpenDraft,
    #[error("exercise draft has no target workout")]
    MissingTarget,
}

/// A planning session: the store plus the "add exercise" form, if open.
///
/// At most one draft is open at a time. Opening a new one discards the
/// previous draft, as does cancelling or a successful submit.
#[derive(Debug, Default)]
pub struct Planner {
    store: PlanStore,
    draft: Option<ExerciseDraft>,
}

impl Planner {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            store: PlanStore::with_copy_suffix(settings.copy_suffix.clone()),
            draft: None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PlanStore {
        &mut self.store
    }

    #[must_use]
    pub fn exercise_draft(&self) -> Option<&ExerciseDraft> {
        self.draft.as_ref()
    }

    pub fn exercise_draft_mut(&mut self) -> Option<&mut ExerciseDraft> {
        self.draft.as_mut()
    }

    /// Start an empty draft for the workout at `workout_index`.
    pub fn open_exercise_draft(
        &mut self,
        workout_index: usize,
    ) -> Result<&mut ExerciseDraft, PlannerError> {
        if workout_index >= self.store.len() {
            let err = PlanError::IndexOutOfRange {
                target: Target::Workout,
                index: workout_index,
                len: self.store.len(),
            };
            warn!("failed to open exercise draft: {err}");
            return Err(err.into());
        }
        if self.draft.is_some() {
            debug!("discard open exercise draft");
        }
        debug!("open exercise draft for workout {workout_index}");
        Ok(self.draft.insert(ExerciseDraft::open(workout_index)))
    }

    pub fn cancel_exercise_draft(&mut self) -> Option<ExerciseDraft> {
        let draft = self.draft.take();
        if draft.is_some() {
            debug!("cancel exercise draft");
        }
        draft
    }

    /// Add the open draft to its target workout and close it.
    ///
    /// If the target no longer exists, the draft stays open.
    pub fn submit_exercise_draft(&mut self) -> Result<Snapshot<'_>, PlannerError> {
        let draft = self.draft.take().ok_or(PlannerError::NoOpenDraft)?;
        let Some(workout_index) = draft.workout_index else {
            self.draft = Some(draft);
            return Err(PlannerError::MissingTarget);
        };
        match self.store.add_exercise(workout_index, draft.clone()) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                self.draft = Some(draft);
                Err(err.into())
            }
        }
    }
}
