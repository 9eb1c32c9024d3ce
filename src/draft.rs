//! Draft workout being assembled on the creation screen.

use crate::{
    error::DraftError,
    export::{export_and_log, WorkoutExporter},
    models::{Exercise, WeightUnit, Workout},
    store::WorkoutStore,
};

/// Transient values typed into the "Add Exercises" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseInput {
    pub name: String,
    pub rep_count: String,
    pub set_count: String,
    pub weight: f64,
    pub unit: WeightUnit,
}

impl ExerciseInput {
    fn validate(&self) -> Result<(), DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyExerciseName);
        }
        if self.rep_count.is_empty() {
            return Err(DraftError::EmptyRepCount);
        }
        if self.set_count.is_empty() {
            return Err(DraftError::EmptySetCount);
        }
        Ok(())
    }

    /// Clears everything but the unit selection.
    fn clear(&mut self) {
        self.name.clear();
        self.rep_count.clear();
        self.set_count.clear();
        self.weight = 0.0;
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftBuilder {
    pub workout_name: String,
    pub input: ExerciseInput,
    exercises: Vec<Exercise>,
}

impl DraftBuilder {
    pub fn new(default_unit: WeightUnit) -> Self {
        Self {
            input: ExerciseInput {
                unit: default_unit,
                ..ExerciseInput::default()
            },
            ..Self::default()
        }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Turns the current input into a draft exercise. Nothing changes when
    /// name, rep count or set count is empty.
    pub fn add_exercise(&mut self) -> Result<&Exercise, DraftError> {
        self.input.validate()?;

        let input = &self.input;
        let exercise = Exercise::new(
            &input.name,
            &input.rep_count,
            &input.set_count,
            input.weight,
            input.unit,
        );
        self.exercises.push(exercise);
        self.input.clear();

        Ok(&self.exercises[self.exercises.len() - 1])
    }

    /// Removes the draft exercises at `indices`. Out of range and repeated
    /// indices are ignored.
    pub fn delete_exercises(&mut self, indices: &[usize]) {
        let mut offsets: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.exercises.len())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        for i in offsets.into_iter().rev() {
            self.exercises.remove(i);
        }
    }

    /// Moves the draft exercises into a new workout, appends it to the
    /// store and exports it. The draft list is empty afterwards, so a saved
    /// exercise never shares its id with another one.
    ///
    /// A failed export is logged but the workout stays in the store.
    /// Returns the index of the new workout.
    pub fn save(
        &mut self,
        store: &mut WorkoutStore,
        exporter: &dyn WorkoutExporter,
    ) -> Result<usize, DraftError> {
        if self.workout_name.is_empty() {
            return Err(DraftError::EmptyWorkoutName);
        }
        if self.exercises.is_empty() {
            return Err(DraftError::NoExercises);
        }

        let exercises = std::mem::take(&mut self.exercises);
        let index = store.append(Workout::new(&self.workout_name, exercises));
        if let Ok(saved) = store.workout(index) {
            export_and_log(exporter, saved);
        }
        Ok(index)
    }
}

#[cfg(test)]
#[path = "./draft_tests.rs"]
mod tests;
