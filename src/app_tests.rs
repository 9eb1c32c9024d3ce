use super::*;
use crate::{
    models::{Exercise, WeightUnit, Workout},
    test_utils::RecordingExporter,
};

fn setup() -> GymApp {
    let mut store = WorkoutStore::new();
    store.append(Workout::new(
        "Leg Day",
        vec![Exercise::new("Squat", "5", "3", 100.0, WeightUnit::Kg)],
    ));
    let config = AppConfig {
        default_unit: WeightUnit::Lbs,
        ..AppConfig::default()
    };
    GymApp::with_store(store.shared(), config, Rc::new(RecordingExporter::default()))
}

#[test]
fn starts_on_workout_list() {
    let app = setup();
    assert_eq!(app.tab(), Tab::MyWorkouts);
    assert!(matches!(app.pane(), WorkoutsPane::List(_)));
}

#[test]
fn create_uses_configured_unit() {
    let mut app = setup();
    app.navigate(Nav::CreateWorkout);
    match app.pane() {
        WorkoutsPane::Create(view) => {
            assert_eq!(view.draft().input.unit, WeightUnit::Lbs);
            assert!(view.draft().exercises().is_empty());
        }
        _ => panic!("expected create pane"),
    }
}

#[test]
fn edit_opens_for_valid_indices() {
    let mut app = setup();
    app.navigate(Nav::EditExercise {
        workout: 0,
        exercise: 0,
    });
    match app.pane() {
        WorkoutsPane::Edit(view) => {
            assert_eq!(view.editor().workout_index(), 0);
            assert_eq!(view.editor().exercise_index(), 0);
        }
        _ => panic!("expected edit pane"),
    }
}

#[test]
fn edit_with_stale_indices_stays_on_list() {
    let mut app = setup();
    app.navigate(Nav::EditExercise {
        workout: 0,
        exercise: 4,
    });
    assert!(matches!(app.pane(), WorkoutsPane::List(_)));

    app.navigate(Nav::EditExercise {
        workout: 3,
        exercise: 0,
    });
    assert!(matches!(app.pane(), WorkoutsPane::List(_)));
}

#[test]
fn leaving_create_discards_draft() {
    let mut app = setup();
    app.navigate(Nav::CreateWorkout);
    app.navigate(Nav::MyWorkouts);
    app.navigate(Nav::CreateWorkout);
    match app.pane() {
        WorkoutsPane::Create(view) => assert!(view.draft().workout_name.is_empty()),
        _ => panic!("expected create pane"),
    }
}
