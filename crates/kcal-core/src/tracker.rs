//! The in-memory ledger of meals, workouts, limit and running total.
//!
//! `Tracker` owns the authoritative state for a session and drives
//! every mutation through its store so the two stay consistent. The
//! view layer calls mutators with validated input and re-reads the
//! derived queries afterwards; no derived value is ever stored.

use uuid::Uuid;

use crate::error::Result;
use crate::storage::{Entry, TrackerStore};

/// Daily calorie limit used when the store has none.
pub const DEFAULT_CALORIE_LIMIT: u32 = 2000;

/// Calorie-balance ledger, hydrated once per session from its store.
pub struct Tracker<S: TrackerStore> {
    store: S,
    calorie_limit: u32,
    total_calories: i64,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
}

fn calorie_sum(entries: &[Entry]) -> i64 {
    entries.iter().map(|entry| i64::from(entry.calories)).sum()
}

impl<S: TrackerStore> Tracker<S> {
    /// Hydrate a tracker from the given store.
    ///
    /// The running total is recomputed from the stored entry lists
    /// rather than read back as a scalar, so a drifted or corrupted
    /// `total_calories` slot cannot survive a restart. The recomputed
    /// value is written back so the store converges too.
    pub fn hydrate(mut store: S) -> Result<Self> {
        let calorie_limit = store.calorie_limit(DEFAULT_CALORIE_LIMIT);
        let meals = store.meals();
        let workouts = store.workouts();
        let total_calories = calorie_sum(&meals) - calorie_sum(&workouts);
        store.update_calories(total_calories)?;

        Ok(Self {
            store,
            calorie_limit,
            total_calories,
            meals,
            workouts,
        })
    }

    /// Consume the tracker, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- Mutators ---

    /// Add a meal and write it through. Returns the new entry's id.
    ///
    /// Input validation (non-empty name) is the caller's job; the
    /// non-negative calorie rule is carried by the type.
    pub fn add_meal(&mut self, name: impl Into<String>, calories: u32) -> Result<Uuid> {
        let entry = Entry::new(name, calories);
        let id = entry.id;
        self.total_calories += i64::from(entry.calories);
        self.store.update_calories(self.total_calories)?;
        self.store.save_meal(&entry)?;
        self.meals.push(entry);
        Ok(id)
    }

    /// Add a workout and write it through. Returns the new entry's id.
    pub fn add_workout(&mut self, name: impl Into<String>, calories: u32) -> Result<Uuid> {
        let entry = Entry::new(name, calories);
        let id = entry.id;
        self.total_calories -= i64::from(entry.calories);
        self.store.update_calories(self.total_calories)?;
        self.store.save_workout(&entry)?;
        self.workouts.push(entry);
        Ok(id)
    }

    /// Remove a meal by id, reversing its contribution to the total.
    ///
    /// Returns `Ok(false)` when no such meal exists; an unknown id is
    /// a no-op, not an error.
    pub fn remove_meal(&mut self, id: &Uuid) -> Result<bool> {
        let Some(index) = self.meals.iter().position(|meal| meal.id == *id) else {
            return Ok(false);
        };
        let meal = self.meals.remove(index);
        self.total_calories -= i64::from(meal.calories);
        self.store.update_calories(self.total_calories)?;
        self.store.remove_meal(id)?;
        Ok(true)
    }

    /// Remove a workout by id. Returns `Ok(false)` when not found.
    pub fn remove_workout(&mut self, id: &Uuid) -> Result<bool> {
        let Some(index) = self.workouts.iter().position(|workout| workout.id == *id) else {
            return Ok(false);
        };
        let workout = self.workouts.remove(index);
        self.total_calories += i64::from(workout.calories);
        self.store.update_calories(self.total_calories)?;
        self.store.remove_workout(id)?;
        Ok(true)
    }

    /// Set the daily calorie limit, in memory and in the store.
    pub fn set_limit(&mut self, value: u32) -> Result<()> {
        self.store.set_calorie_limit(value)?;
        self.calorie_limit = value;
        Ok(())
    }

    /// Zero the total, empty both lists, and wipe the store.
    ///
    /// The wipe is a full clear, limit slot included; the next
    /// hydration comes back at [`DEFAULT_CALORIE_LIMIT`].
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear_all()?;
        self.total_calories = 0;
        self.meals.clear();
        self.workouts.clear();
        Ok(())
    }

    // --- Queries ---

    /// The daily calorie limit.
    pub fn limit(&self) -> u32 {
        self.calorie_limit
    }

    /// Running balance: consumed minus burned. Negative when workouts
    /// outweigh meals.
    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    /// Sum of meal calories.
    pub fn calories_consumed(&self) -> i64 {
        calorie_sum(&self.meals)
    }

    /// Sum of workout calories.
    pub fn calories_burned(&self) -> i64 {
        calorie_sum(&self.workouts)
    }

    /// Limit minus running total.
    pub fn calories_remaining(&self) -> i64 {
        i64::from(self.calorie_limit) - self.total_calories
    }

    /// Total as a percentage of the limit, clamped at 100 above and
    /// unclamped below (a negative total yields a negative number).
    pub fn progress_percentage(&self) -> f64 {
        let percentage = (self.total_calories as f64 / f64::from(self.calorie_limit)) * 100.0;
        percentage.min(100.0)
    }

    /// Whether the limit is reached or exceeded (`remaining <= 0`).
    /// The threshold rule lives here so the view layer never
    /// recomputes it.
    pub fn is_over_limit(&self) -> bool {
        self.calories_remaining() <= 0
    }

    /// Logged meals, in insertion order.
    pub fn meals(&self) -> &[Entry] {
        &self.meals
    }

    /// Logged workouts, in insertion order.
    pub fn workouts(&self) -> &[Entry] {
        &self.workouts
    }
}
