use std::rc::Rc;

use eframe::{egui, App, CreationContext, Frame};
use egui::{Align, Layout};

use crate::{
    config::AppConfig,
    editor::ExerciseEditor,
    export::WorkoutExporter,
    store::{SharedStore, WorkoutStore},
    views::{AnalyticsView, CreateWorkoutView, EditExerciseView, MyWorkoutsView, Nav},
};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Tab {
    MyWorkouts,
    Analytics,
}

/// What the "My Workouts" tab is currently showing
pub enum WorkoutsPane {
    List(MyWorkoutsView),
    Create(CreateWorkoutView),
    Edit(EditExerciseView),
}

pub struct GymApp {
    store: SharedStore,
    exporter: Rc<dyn WorkoutExporter>,
    config: AppConfig,
    tab: Tab,
    pane: WorkoutsPane,
    analytics: AnalyticsView,
}

impl GymApp {
    pub fn new(cc: &CreationContext, config: AppConfig, exporter: Rc<dyn WorkoutExporter>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        Self::with_store(WorkoutStore::new().shared(), config, exporter)
    }

    pub fn with_store(
        store: SharedStore,
        config: AppConfig,
        exporter: Rc<dyn WorkoutExporter>,
    ) -> Self {
        GymApp {
            pane: WorkoutsPane::List(MyWorkoutsView::new(Rc::clone(&store))),
            analytics: AnalyticsView::new(Rc::clone(&store)),
            store,
            exporter,
            config,
            tab: Tab::MyWorkouts,
        }
    }

    #[cfg(test)]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[cfg(test)]
    pub fn pane(&self) -> &WorkoutsPane {
        &self.pane
    }

    /// Swaps the "My Workouts" pane. Leaving the creation screen drops its
    /// draft; an edit target that no longer resolves keeps the list open.
    pub fn navigate(&mut self, nav: Nav) {
        self.pane = match nav {
            Nav::MyWorkouts => WorkoutsPane::List(MyWorkoutsView::new(Rc::clone(&self.store))),
            Nav::CreateWorkout => WorkoutsPane::Create(CreateWorkoutView::new(
                Rc::clone(&self.store),
                Rc::clone(&self.exporter),
                self.config.default_unit,
                self.config.slider_max(),
            )),
            Nav::EditExercise { workout, exercise } => {
                let opened = ExerciseEditor::open(&self.store.borrow(), workout, exercise);
                match opened {
                    Ok(editor) => WorkoutsPane::Edit(EditExerciseView::new(
                        editor,
                        Rc::clone(&self.store),
                        Rc::clone(&self.exporter),
                        self.config.slider_max(),
                    )),
                    Err(e) => {
                        log::warn!("cannot edit exercise: {}", e);
                        WorkoutsPane::List(MyWorkoutsView::new(Rc::clone(&self.store)))
                    }
                }
            }
        };
    }
}

impl App for GymApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.horizontal(|ui| {
                    if ui.selectable_label(self.tab == Tab::MyWorkouts, "My Workouts").clicked() {
                        self.tab = Tab::MyWorkouts;
                    }
                    if ui.selectable_label(self.tab == Tab::Analytics, "Analytics").clicked() {
                        self.tab = Tab::Analytics;
                    }
                });
                ui.separator();

                match self.tab {
                    Tab::MyWorkouts => {
                        let nav = match &mut self.pane {
                            WorkoutsPane::List(view) => view.show(ui),
                            WorkoutsPane::Create(view) => view.show(ui),
                            WorkoutsPane::Edit(view) => view.show(ui),
                        };
                        if let Some(nav) = nav {
                            self.navigate(nav);
                        }
                    }
                    Tab::Analytics => self.analytics.show(ui),
                }
            });
        });
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
