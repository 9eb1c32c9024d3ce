use std::rc::Rc;

use eframe::egui;
use egui::{ComboBox, ProgressBar, RichText, ScrollArea, Slider, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::{
    analytics::{Analytics, AnalyticsContent},
    draft::DraftBuilder,
    editor::ExerciseEditor,
    export::WorkoutExporter,
    models::WeightUnit,
    store::SharedStore,
};

/// Where a view wants the app to go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    MyWorkouts,
    CreateWorkout,
    EditExercise { workout: usize, exercise: usize },
}

fn title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).heading().size(32.0).strong());
    ui.add_space(10.0);
}

fn weight_slider(ui: &mut Ui, weight: &mut f64, unit: WeightUnit, max: f64) {
    ui.horizontal(|ui| {
        ui.add(Slider::new(weight, 0.0..=max).step_by(1.0).show_value(false));
        ui.label(format!("{:.1}", weight));
        ui.label(unit.to_string());
    });
}

pub struct MyWorkoutsView {
    store: SharedStore,
}

impl MyWorkoutsView {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<Nav> {
        let mut nav = None;
        let mut reweigh: Option<(usize, usize)> = None;

        title(ui, "My Workouts");
        if ui.button(RichText::new("Create New Workout").size(24.0)).clicked() {
            nav = Some(Nav::CreateWorkout);
        }
        ui.add_space(20.0);

        {
            let store = self.store.borrow();
            if store.is_empty() {
                ui.label("No workouts saved yet.");
            }

            ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                for (w_idx, workout) in store.workouts().iter().enumerate() {
                    ui.label(RichText::new(&workout.name).size(28.0).strong());
                    ui.label(format!("Saved {}", workout.saved_at.format("%Y-%m-%d %H:%M")));

                    TableBuilder::new(ui)
                        .id_salt(("workout", w_idx))
                        .striped(true)
                        .vscroll(false)
                        .column(Column::remainder())
                        .columns(Column::auto(), 5)
                        .header(24.0, |mut header| {
                            for heading in ["Exercise", "Rep Count", "Set Count", "Weight", "", ""] {
                                header.col(|ui| {
                                    ui.strong(heading);
                                });
                            }
                        })
                        .body(|mut body| {
                            for (e_idx, exercise) in workout.exercises.iter().enumerate() {
                                body.row(26.0, |mut row| {
                                    row.col(|ui| {
                                        ui.label(&exercise.name);
                                    });
                                    row.col(|ui| {
                                        ui.label(&exercise.rep_count);
                                    });
                                    row.col(|ui| {
                                        ui.label(&exercise.set_count);
                                    });
                                    row.col(|ui| {
                                        ui.label(format!("{:.1} {}", exercise.weight, exercise.unit));
                                    });
                                    row.col(|ui| {
                                        if ui.button("Add New Weight").clicked() {
                                            reweigh = Some((w_idx, e_idx));
                                        }
                                    });
                                    row.col(|ui| {
                                        if ui.button("Edit").clicked() {
                                            nav = Some(Nav::EditExercise {
                                                workout: w_idx,
                                                exercise: e_idx,
                                            });
                                        }
                                    });
                                });
                            }
                        });
                    ui.add_space(20.0);
                }
            });
        }

        if let Some((workout, exercise)) = reweigh {
            let mut store = self.store.borrow_mut();
            if let Err(e) = store.add_new_weight(workout, exercise, &mut rand::thread_rng()) {
                log::warn!("could not update weight: {}", e);
            }
        }

        nav
    }
}

pub struct CreateWorkoutView {
    draft: DraftBuilder,
    store: SharedStore,
    exporter: Rc<dyn WorkoutExporter>,
    slider_max: f64,
}

impl CreateWorkoutView {
    pub fn new(
        store: SharedStore,
        exporter: Rc<dyn WorkoutExporter>,
        default_unit: WeightUnit,
        slider_max: f64,
    ) -> Self {
        Self {
            draft: DraftBuilder::new(default_unit),
            store,
            exporter,
            slider_max,
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &DraftBuilder {
        &self.draft
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<Nav> {
        let mut nav = None;

        ui.horizontal(|ui| {
            if ui.button("< My Workouts").clicked() {
                nav = Some(Nav::MyWorkouts);
            }
        });
        title(ui, "Create Workout");

        ui.label(RichText::new("Workout Name").strong());
        ui.add(TextEdit::singleline(&mut self.draft.workout_name).hint_text("Workout Name"));
        ui.separator();

        ui.label(RichText::new("Add Exercises").strong());
        let input = &mut self.draft.input;
        ui.add(TextEdit::singleline(&mut input.name).hint_text("Exercise Name"));
        ui.horizontal(|ui| {
            ui.add(TextEdit::singleline(&mut input.rep_count).hint_text("Rep Count"));
            ui.add(TextEdit::singleline(&mut input.set_count).hint_text("Set Count"));
        });
        weight_slider(ui, &mut input.weight, input.unit, self.slider_max);
        ui.horizontal(|ui| {
            for unit in WeightUnit::iter() {
                ui.selectable_value(&mut input.unit, unit, unit.to_string());
            }
        });
        if ui.button("Add Exercise").clicked() {
            if let Err(e) = self.draft.add_exercise() {
                log::debug!("exercise not added: {}", e);
            }
        }
        ui.separator();

        ui.label(RichText::new("Exercises").strong());
        let mut delete = None;
        for (i, exercise) in self.draft.exercises().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&exercise.name).strong());
                ui.label(format!("Rep Count: {}", exercise.rep_count));
                ui.label(format!("Set Count: {}", exercise.set_count));
                ui.label(format!("Weight: {:.1} {}", exercise.weight, exercise.unit));
                if ui.small_button("Delete").clicked() {
                    delete = Some(i);
                }
            });
        }
        if let Some(i) = delete {
            self.draft.delete_exercises(&[i]);
        }
        ui.separator();

        if ui.button(RichText::new("Save Workout").size(24.0)).clicked() {
            let saved = self
                .draft
                .save(&mut self.store.borrow_mut(), self.exporter.as_ref());
            match saved {
                Ok(_) => nav = Some(Nav::MyWorkouts),
                Err(e) => log::debug!("workout not saved: {}", e),
            }
        }

        nav
    }
}

pub struct EditExerciseView {
    editor: ExerciseEditor,
    store: SharedStore,
    exporter: Rc<dyn WorkoutExporter>,
    slider_max: f64,
}

impl EditExerciseView {
    pub fn new(
        editor: ExerciseEditor,
        store: SharedStore,
        exporter: Rc<dyn WorkoutExporter>,
        slider_max: f64,
    ) -> Self {
        Self {
            editor,
            store,
            exporter,
            slider_max,
        }
    }

    #[cfg(test)]
    pub fn editor(&self) -> ExerciseEditor {
        self.editor
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<Nav> {
        let mut nav = None;

        ui.horizontal(|ui| {
            if ui.button("< My Workouts").clicked() {
                nav = Some(Nav::MyWorkouts);
            }
        });
        title(ui, "Edit Exercise");

        {
            let mut store = self.store.borrow_mut();
            match self.editor.exercise_mut(&mut store) {
                Ok(exercise) => {
                    ui.add(TextEdit::singleline(&mut exercise.name).hint_text("Exercise Name"));
                    ui.horizontal(|ui| {
                        ui.add(TextEdit::singleline(&mut exercise.rep_count).hint_text("Rep Count"));
                        ui.add(TextEdit::singleline(&mut exercise.set_count).hint_text("Set Count"));
                    });
                    weight_slider(ui, &mut exercise.weight, exercise.unit, self.slider_max);
                }
                Err(e) => {
                    ui.label(format!("Exercise not found: {}", e));
                }
            }
        }

        if ui.button("Save Exercise").clicked() {
            if let Err(e) = self
                .editor
                .save_exercise(&self.store.borrow(), self.exporter.as_ref())
            {
                log::warn!("exercise not saved: {}", e);
            }
        }

        nav
    }
}

pub struct AnalyticsView {
    analytics: Analytics,
    store: SharedStore,
}

impl AnalyticsView {
    pub fn new(store: SharedStore) -> Self {
        Self {
            analytics: Analytics::default(),
            store,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        title(ui, "Analytics");

        ui.add(TextEdit::singleline(&mut self.analytics.search_text).hint_text("Search"));

        let mut show_graph = self.analytics.show_graph;
        if ui.checkbox(&mut show_graph, "Show Graph").changed() {
            self.analytics.toggle_graph();
        }

        let store = self.store.borrow();
        let selected_name = self
            .analytics
            .selected
            .and_then(|i| store.workout(i).ok())
            .map(|w| w.name.clone())
            .unwrap_or_else(|| "Select a workout".to_string());

        let mut choice = None;
        ComboBox::from_label("Workout")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for (i, workout) in store.workouts().iter().enumerate() {
                    let selected = self.analytics.selected == Some(i);
                    if ui.selectable_label(selected, &workout.name).clicked() {
                        choice = Some(i);
                    }
                }
            });
        if let Some(i) = choice {
            self.analytics.select(&store, i);
        }
        ui.add_space(20.0);

        match self.analytics.content(&store) {
            AnalyticsContent::SearchResults => {
                ui.label(RichText::new("Search Results").size(28.0).strong());
            }
            AnalyticsContent::Graph { workout, weights } => {
                ui.label(RichText::new(format!("Graph: {}", workout)).size(28.0).strong());
                let max = weights.iter().copied().fold(0.0, f64::max);
                for weight in weights {
                    let fraction = if max > 0.0 { (weight / max) as f32 } else { 0.0 };
                    ui.add(ProgressBar::new(fraction).text(format!("{:.1}", weight)));
                }
            }
            AnalyticsContent::NoWorkout => {
                ui.label(RichText::new("No workout selected").size(28.0));
            }
        }
    }
}
