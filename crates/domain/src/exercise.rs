use serde::{Serialize, ser::SerializeStruct};

/// The text fields an exercise is created from.
///
/// `reps` and `sets` are free text. Nothing in the planner does arithmetic on
/// them, so values like `"8-12"` or `"AMRAP"` are kept as entered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseFields {
    pub name: String,
    pub muscle: String,
    pub reps: String,
    pub sets: String,
    pub comment: String,
}

/// Data captured after performing an exercise.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub weight: String,
    pub post_comment: String,
}

impl Completion {
    pub fn new(weight: impl Into<String>, post_comment: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            post_comment: post_comment.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Status {
    #[default]
    Pending,
    Done(Completion),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    fields: ExerciseFields,
    status: Status,
}

impl Exercise {
    #[must_use]
    pub fn new(fields: ExerciseFields) -> Self {
        Self {
            fields,
            status: Status::Pending,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &ExerciseFields {
        &self.fields
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    #[must_use]
    pub fn muscle(&self) -> &str {
        &self.fields.muscle
    }

    #[must_use]
    pub fn reps(&self) -> &str {
        &self.fields.reps
    }

    #[must_use]
    pub fn sets(&self) -> &str {
        &self.fields.sets
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.fields.comment
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.status, Status::Done(_))
    }

    /// Empty unless the exercise is done.
    #[must_use]
    pub fn weight(&self) -> &str {
        match &self.status {
            Status::Pending => "",
            Status::Done(completion) => &completion.weight,
        }
    }

    /// Empty unless the exercise is done.
    #[must_use]
    pub fn post_comment(&self) -> &str {
        match &self.status {
            Status::Pending => "",
            Status::Done(completion) => &completion.post_comment,
        }
    }

    /// A fresh pending exercise with the same planned fields.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::new(self.fields.clone())
    }

    /// Flip between pending and done.
    ///
    /// Becoming done stores `completion`, or empty values if none was given.
    /// Becoming pending drops the stored completion and ignores `completion`.
    pub(crate) fn toggle(&mut self, completion: Option<Completion>) {
        self.status = match self.status {
            Status::Pending => Status::Done(completion.unwrap_or_default()),
            Status::Done(_) => Status::Pending,
        };
    }
}

impl Serialize for Exercise {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Exercise", 8)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("muscle", self.muscle())?;
        state.serialize_field("reps", self.reps())?;
        state.serialize_field("sets", self.sets())?;
        state.serialize_field("comment", self.comment())?;
        state.serialize_field("done", &self.is_done())?;
        state.serialize_field("weight", self.weight())?;
        state.serialize_field("postComment", self.post_comment())?;
        state.end()
    }
}
