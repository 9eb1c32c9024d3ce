use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::models::WeightUnit;

fn setup() -> WorkoutStore {
    let mut store = WorkoutStore::new();
    store.append(Workout::new(
        "Push",
        vec![
            Exercise::new("Bench Press", "8", "4", 60.0, WeightUnit::Kg),
            Exercise::new("Dips", "12", "3", 0.0, WeightUnit::Kg),
        ],
    ));
    store.append(Workout::new(
        "Pull",
        vec![Exercise::new("Row", "10", "3", 135.0, WeightUnit::Lbs)],
    ));
    store
}

#[test]
fn append_preserves_save_order() {
    let store = setup();
    assert_eq!(store.len(), 2);
    let names: Vec<&str> = store.workouts().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Push", "Pull"]);
}

#[test]
fn append_returns_new_index() {
    let mut store = setup();
    let idx = store.append(Workout::new("Legs", vec![]));
    assert_eq!(idx, 2);
    assert_eq!(store.workout(idx).unwrap().name, "Legs");
}

#[test]
fn lookups_out_of_range_return_not_found() {
    let mut store = setup();
    assert_eq!(store.workout(5).unwrap_err(), StoreError::WorkoutNotFound(5));
    assert_eq!(
        store.exercise(1, 3).unwrap_err(),
        StoreError::ExerciseNotFound {
            workout: 1,
            exercise: 3
        }
    );
    assert!(store.exercise_mut(9, 0).is_err());

    let empty = WorkoutStore::new();
    assert!(empty.is_empty());
    assert_eq!(empty.workout(0).unwrap_err(), StoreError::WorkoutNotFound(0));
}

#[test]
fn add_new_weight_only_touches_target() {
    let mut store = setup();
    let before = store.exercise(0, 0).unwrap().clone();
    let untouched = store.exercise(0, 1).unwrap().clone();
    let other_workout = store.exercise(1, 0).unwrap().clone();

    let mut rng = StdRng::seed_from_u64(7);
    let weight = store.add_new_weight(0, 0, &mut rng).unwrap();

    assert!((NEW_WEIGHT_MIN..=NEW_WEIGHT_MAX).contains(&weight));

    let after = store.exercise(0, 0).unwrap();
    assert_eq!(after.weight, weight);
    assert_eq!(after.id(), before.id());
    assert_eq!(after.name, before.name);
    assert_eq!(after.rep_count, before.rep_count);
    assert_eq!(after.set_count, before.set_count);
    assert_eq!(after.unit, before.unit);

    assert_eq!(store.exercise(0, 1).unwrap(), &untouched);
    assert_eq!(store.exercise(1, 0).unwrap(), &other_workout);
}

#[test]
fn add_new_weight_stays_in_range() {
    let mut store = setup();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let weight = store.add_new_weight(1, 0, &mut rng).unwrap();
        assert!(weight >= NEW_WEIGHT_MIN && weight <= NEW_WEIGHT_MAX);
    }
}

#[test]
fn add_new_weight_with_stale_index_changes_nothing() {
    let mut store = setup();
    let mut rng = StdRng::seed_from_u64(1);
    let err = store.add_new_weight(0, 2, &mut rng).unwrap_err();
    assert_eq!(
        err,
        StoreError::ExerciseNotFound {
            workout: 0,
            exercise: 2
        }
    );
    assert_eq!(store.exercise(0, 0).unwrap().weight, 60.0);
    assert_eq!(store.exercise(0, 1).unwrap().weight, 0.0);
}

#[test]
fn shared_handle_sees_mutations() {
    let shared = setup().shared();
    let other = Rc::clone(&shared);

    other.borrow_mut().exercise_mut(1, 0).unwrap().weight = 140.0;

    assert_eq!(shared.borrow().exercise(1, 0).unwrap().weight, 140.0);
}
