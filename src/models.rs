//models.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    #[strum(serialize = "kg")]
    Kg,
    #[strum(serialize = "lbs")]
    Lbs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    id: Uuid,
    pub name: String,
    pub rep_count: String,
    pub set_count: String,
    pub weight: f64,
    pub unit: WeightUnit,
}

impl Exercise {
    pub fn new(name: &str, rep_count: &str, set_count: &str, weight: f64, unit: WeightUnit) -> Self {
        Exercise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            rep_count: rep_count.to_string(),
            set_count: set_count.to_string(),
            weight,
            unit,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Clone, Debug)]
pub struct Workout {
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub saved_at: DateTime<Local>,
}

impl Workout {
    pub fn new(name: &str, exercises: Vec<Exercise>) -> Self {
        Workout {
            name: name.to_string(),
            exercises,
            saved_at: Local::now(),
        }
    }

    pub fn weights(&self) -> Vec<f64> {
        self.exercises.iter().map(|e| e.weight).collect()
    }
}

/// Formats a weight the way it appears in exported files: shortest
/// round-trip representation, always with a decimal point.
pub fn format_weight(weight: f64) -> String {
    format!("{:?}", weight)
}
