//! Live editor for one exercise of a saved workout.

use std::path::PathBuf;

use crate::{
    error::StoreError,
    export::{export_and_log, WorkoutExporter},
    models::Exercise,
    store::WorkoutStore,
};

/// Points at one exercise inside the store. Edits go straight to the store,
/// there is no separate draft to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEditor {
    workout: usize,
    exercise: usize,
}

impl ExerciseEditor {
    /// Opens an editor, failing if the indices do not resolve.
    pub fn open(store: &WorkoutStore, workout: usize, exercise: usize) -> Result<Self, StoreError> {
        store.exercise(workout, exercise)?;
        Ok(Self { workout, exercise })
    }

    #[cfg(test)]
    pub fn workout_index(&self) -> usize {
        self.workout
    }

    #[cfg(test)]
    pub fn exercise_index(&self) -> usize {
        self.exercise
    }

    pub fn exercise<'a>(&self, store: &'a WorkoutStore) -> Result<&'a Exercise, StoreError> {
        store.exercise(self.workout, self.exercise)
    }

    pub fn exercise_mut<'a>(
        &self,
        store: &'a mut WorkoutStore,
    ) -> Result<&'a mut Exercise, StoreError> {
        store.exercise_mut(self.workout, self.exercise)
    }

    /// Re-exports the workout holding the edited exercise. The store itself
    /// is already up to date. Returns the written path, or `None` if the
    /// export failed.
    pub fn save_exercise(
        &self,
        store: &WorkoutStore,
        exporter: &dyn WorkoutExporter,
    ) -> Result<Option<PathBuf>, StoreError> {
        // a stale exercise index is still an error even though only the
        // workout gets written
        self.exercise(store)?;
        let workout = store.workout(self.workout)?;
        Ok(export_and_log(exporter, workout))
    }
}

#[cfg(test)]
#[path = "./editor_tests.rs"]
mod tests;
