//! Plain-text workout export. Files are write-only: nothing ever reads them
//! back into the store.

use std::{fs, path::PathBuf};

use crate::{
    error::ExportError,
    models::{format_weight, Workout},
};

pub const FILE_EXTENSION: &str = "txt";

/// Writes a workout somewhere outside the process
pub trait WorkoutExporter {
    fn export(&self, workout: &Workout) -> Result<PathBuf, ExportError>;
}

/// Renders a workout in the export text format.
pub fn render_workout(workout: &Workout) -> String {
    let mut text = format!("Workout Name: {}\n\n", workout.name);
    text.push_str("Exercises:\n");
    for exercise in &workout.exercises {
        text.push_str(&format!("- Exercise Name: {}\n", exercise.name));
        text.push_str(&format!("  Rep Count: {}\n", exercise.rep_count));
        text.push_str(&format!("  Set Count: {}\n", exercise.set_count));
        text.push_str(&format!(
            "  Weight: {} {}\n\n",
            format_weight(exercise.weight),
            exercise.unit
        ));
    }
    text
}

/// File name for a workout: the workout name with path separators replaced,
/// plus the `.txt` extension.
pub fn file_name(workout_name: &str) -> String {
    let safe: String = workout_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.{}", safe, FILE_EXTENSION)
}

/// Exports one text file per workout into a documents directory,
/// overwriting any previous export of the same name.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, workout_name: &str) -> PathBuf {
        self.dir.join(file_name(workout_name))
    }
}

impl WorkoutExporter for TextFileExporter {
    fn export(&self, workout: &Workout) -> Result<PathBuf, ExportError> {
        let path = self.path_for(&workout.name);
        let io_err = |source: std::io::Error| ExportError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;

        // write next to the target then rename so readers never see a
        // half-written file
        let tmp = path.with_extension(format!("{}.tmp", FILE_EXTENSION));
        fs::write(&tmp, render_workout(workout)).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }

        Ok(path)
    }
}

/// Exports a workout and logs the outcome. Failures are swallowed: the
/// file is a convenience copy, the store stays authoritative.
pub fn export_and_log(exporter: &dyn WorkoutExporter, workout: &Workout) -> Option<PathBuf> {
    match exporter.export(workout) {
        Ok(path) => {
            log::info!("workout saved: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("failed to save workout {}: {}", workout.name, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "./export_tests.rs"]
mod tests;
