//! Placeholder analytics screen state. The search text is collected but
//! never used; the graph is just the selected workout's weights.

use crate::store::WorkoutStore;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsContent {
    /// Static label shown while the graph is off
    SearchResults,
    /// Weights of the selected workout's exercises, in order
    Graph { workout: String, weights: Vec<f64> },
    /// Graph requested but nothing valid is selected
    NoWorkout,
}

#[derive(Debug, Clone, Default)]
pub struct Analytics {
    pub search_text: String,
    pub show_graph: bool,
    pub selected: Option<usize>,
}

impl Analytics {
    pub fn toggle_graph(&mut self) {
        self.show_graph = !self.show_graph;
    }

    /// Selects a workout. Indices past the end of the store clear the
    /// selection.
    pub fn select(&mut self, store: &WorkoutStore, index: usize) {
        self.selected = store.workout(index).ok().map(|_| index);
    }

    pub fn content(&self, store: &WorkoutStore) -> AnalyticsContent {
        if !self.show_graph {
            return AnalyticsContent::SearchResults;
        }
        match self.selected.and_then(|i| store.workout(i).ok()) {
            Some(workout) => AnalyticsContent::Graph {
                workout: workout.name.clone(),
                weights: workout.weights(),
            },
            None => AnalyticsContent::NoWorkout,
        }
    }
}

#[cfg(test)]
#[path = "./analytics_tests.rs"]
mod tests;
