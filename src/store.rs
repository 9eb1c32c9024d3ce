//! In-memory, append-only collection of saved workouts for the current
//! session.

use std::{cell::RefCell, rc::Rc};

use rand::Rng;

use crate::{
    error::StoreError,
    models::{Exercise, Workout},
};

pub const NEW_WEIGHT_MIN: f64 = 50.0;
pub const NEW_WEIGHT_MAX: f64 = 100.0;

/// Handle to the store shared between the app and its screens
pub type SharedStore = Rc<RefCell<WorkoutStore>>;

#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a store in a shareable handle.
    pub fn shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    /// Appends a workout and returns its index. Workouts are never removed
    /// or reordered, so the index stays valid for the session.
    pub fn append(&mut self, workout: Workout) -> usize {
        self.workouts.push(workout);
        self.workouts.len() - 1
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn workout(&self, index: usize) -> Result<&Workout, StoreError> {
        self.workouts
            .get(index)
            .ok_or(StoreError::WorkoutNotFound(index))
    }

    pub fn exercise(&self, workout: usize, exercise: usize) -> Result<&Exercise, StoreError> {
        self.workout(workout)?
            .exercises
            .get(exercise)
            .ok_or(StoreError::ExerciseNotFound { workout, exercise })
    }

    pub fn exercise_mut(
        &mut self,
        workout: usize,
        exercise: usize,
    ) -> Result<&mut Exercise, StoreError> {
        self.workouts
            .get_mut(workout)
            .ok_or(StoreError::WorkoutNotFound(workout))?
            .exercises
            .get_mut(exercise)
            .ok_or(StoreError::ExerciseNotFound { workout, exercise })
    }

    /// Overwrites an exercise's weight with a random value in
    /// [NEW_WEIGHT_MIN, NEW_WEIGHT_MAX]. The previous weight is discarded.
    pub fn add_new_weight<R: Rng>(
        &mut self,
        workout: usize,
        exercise: usize,
        rng: &mut R,
    ) -> Result<f64, StoreError> {
        let target = self.exercise_mut(workout, exercise)?;
        let weight = rng.gen_range(NEW_WEIGHT_MIN..=NEW_WEIGHT_MAX);
        log::debug!(
            "replacing weight of {} ({}) {} -> {}",
            target.name,
            target.id(),
            target.weight,
            weight
        );
        target.weight = weight;
        Ok(weight)
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
