//! Error types for the workout store, draft builder and file export.

use std::path::PathBuf;

use thiserror::Error;

/// Validation failures raised while building a draft workout
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("exercise name is empty")]
    EmptyExerciseName,

    #[error("rep count is empty")]
    EmptyRepCount,

    #[error("set count is empty")]
    EmptySetCount,

    #[error("workout name is empty")]
    EmptyWorkoutName,

    #[error("workout has no exercises")]
    NoExercises,
}

/// Lookup failures from the bounds-checked store accessors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("no workout at index {0}")]
    WorkoutNotFound(usize),

    #[error("no exercise at index {exercise} in workout {workout}")]
    ExerciseNotFound { workout: usize, exercise: usize },
}

/// Failures writing a workout file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve a documents directory")]
    NoDocumentsDir,
}

/// Failures reading the application config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
