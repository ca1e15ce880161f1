use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use kcal_core::{SqliteStore, Tracker, TrackerStore, DEFAULT_CALORIE_LIMIT};

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("kcal.db")
}

#[test]
fn test_open_creates_file_and_metadata() {
    let dir = TempDir::new().expect("temp dir");
    let path = store_path(&dir);

    let store = SqliteStore::open(&path).expect("open should succeed");
    assert!(path.exists());

    let metadata = store.metadata().expect("metadata should be present");
    assert_eq!(metadata.format_version, "0.1");
}

#[test]
fn test_open_creates_missing_parent_dirs() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("deeper").join("kcal.db");

    SqliteStore::open(&path).expect("open should succeed");
    assert!(path.exists());
}

#[test]
fn test_fresh_store_reads_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let store = SqliteStore::open(&store_path(&dir)).expect("open");

    assert_eq!(store.calorie_limit(DEFAULT_CALORIE_LIMIT), 2000);
    assert_eq!(store.total_calories(0), 0);
    assert!(store.meals().is_empty());
    assert!(store.workouts().is_empty());
}

#[test]
fn test_slots_survive_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = store_path(&dir);

    {
        let mut store = SqliteStore::open(&path).expect("open");
        store.set_calorie_limit(1800).expect("set limit");
        store.update_calories(450).expect("update total");
        store
            .save_meal(&kcal_core::Entry::new("Eggs", 300))
            .expect("save meal");
        store
            .save_workout(&kcal_core::Entry::new("Run", 200))
            .expect("save workout");
    }

    let store = SqliteStore::open(&path).expect("reopen");
    assert_eq!(store.calorie_limit(2000), 1800);
    assert_eq!(store.total_calories(0), 450);
    assert_eq!(store.meals().len(), 1);
    assert_eq!(store.meals()[0].name, "Eggs");
    assert_eq!(store.workouts().len(), 1);
    assert_eq!(store.workouts()[0].calories, 200);
}

#[test]
fn test_remove_filters_by_id_and_rewrites() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = SqliteStore::open(&store_path(&dir)).expect("open");

    let eggs = kcal_core::Entry::new("Eggs", 300);
    let toast = kcal_core::Entry::new("Toast", 150);
    store.save_meal(&eggs).expect("save");
    store.save_meal(&toast).expect("save");

    store.remove_meal(&eggs.id).expect("remove");
    let meals = store.meals();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, toast.id);

    // Removing the same id again leaves the list untouched.
    store.remove_meal(&eggs.id).expect("remove again");
    assert_eq!(store.meals().len(), 1);
}

#[test]
fn test_clear_all_wipes_every_slot() {
    let dir = TempDir::new().expect("temp dir");
    let path = store_path(&dir);

    let mut store = SqliteStore::open(&path).expect("open");
    store.set_calorie_limit(1500).expect("set limit");
    store
        .save_meal(&kcal_core::Entry::new("Eggs", 300))
        .expect("save");
    store.clear_all().expect("clear");

    let store = SqliteStore::open(&path).expect("reopen");
    assert_eq!(store.calorie_limit(2000), 2000);
    assert!(store.meals().is_empty());
}

#[test]
fn test_non_database_file_fails_to_open() {
    let dir = TempDir::new().expect("temp dir");
    let path = store_path(&dir);
    fs::write(&path, "not a sqlite database, much longer than a header")
        .expect("write junk");

    assert!(SqliteStore::open(&path).is_err());
}

#[test]
fn test_tracker_session_round_trip_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = store_path(&dir);

    let meal_id = {
        let store = SqliteStore::open(&path).expect("open");
        let mut tracker = Tracker::hydrate(store).expect("hydrate");
        tracker.set_limit(2200).expect("set limit");
        let id = tracker.add_meal("Pasta", 800).expect("add meal");
        tracker.add_workout("Swim", 350).expect("add workout");
        id
    };

    let store = SqliteStore::open(&path).expect("reopen");
    let mut tracker = Tracker::hydrate(store).expect("rehydrate");
    assert_eq!(tracker.limit(), 2200);
    assert_eq!(tracker.total_calories(), 450);
    assert_eq!(tracker.calories_consumed(), 800);
    assert_eq!(tracker.calories_burned(), 350);

    assert!(tracker.remove_meal(&meal_id).expect("remove"));
    assert_eq!(tracker.total_calories(), -350);
}
