use std::{cell::RefCell, path::PathBuf};

use crate::{
    error::ExportError,
    export::{file_name, render_workout, WorkoutExporter},
    models::Workout,
};

/// Exporter double that records the rendered text of every export
#[derive(Default)]
pub struct RecordingExporter {
    pub exported: RefCell<Vec<(String, String)>>,
}

impl RecordingExporter {
    pub fn count(&self) -> usize {
        self.exported.borrow().len()
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.exported.borrow().last().cloned()
    }
}

impl WorkoutExporter for RecordingExporter {
    fn export(&self, workout: &Workout) -> Result<PathBuf, ExportError> {
        let name = file_name(&workout.name);
        self.exported
            .borrow_mut()
            .push((name.clone(), render_workout(workout)));
        Ok(PathBuf::from(name))
    }
}

/// Exporter double that always fails with a permission error
pub struct FailingExporter;

impl WorkoutExporter for FailingExporter {
    fn export(&self, workout: &Workout) -> Result<PathBuf, ExportError> {
        Err(ExportError::Io {
            path: PathBuf::from(file_name(&workout.name)),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
