//! In-memory storage backend.
//!
//! Useful for tests and for embedding the tracker without a durable
//! file. Follows the same degradation contract as the SQLite backend:
//! absent or malformed slot data reads as the default.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::Result;
use crate::storage::traits::{
    TrackerStore, SLOT_CALORIE_LIMIT, SLOT_MEALS, SLOT_TOTAL_CALORIES, SLOT_WORKOUTS,
};
use crate::storage::types::Entry;

/// HashMap-backed tracker store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw slot value, bypassing the typed accessors. Intended
    /// for simulating pre-existing or corrupt stored data in tests.
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn read_entries(&self, key: &str) -> Vec<Entry> {
        self.slots
            .get(key)
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    fn write_entries(&mut self, key: &str, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.slots.insert(key.to_string(), raw);
        Ok(())
    }
}

impl TrackerStore for MemoryStore {
    fn calorie_limit(&self, default: u32) -> u32 {
        self.slots
            .get(SLOT_CALORIE_LIMIT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default)
    }

    fn set_calorie_limit(&mut self, value: u32) -> Result<()> {
        self.slots
            .insert(SLOT_CALORIE_LIMIT.to_string(), value.to_string());
        Ok(())
    }

    fn total_calories(&self, default: i64) -> i64 {
        self.slots
            .get(SLOT_TOTAL_CALORIES)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default)
    }

    fn update_calories(&mut self, value: i64) -> Result<()> {
        self.slots
            .insert(SLOT_TOTAL_CALORIES.to_string(), value.to_string());
        Ok(())
    }

    fn meals(&self) -> Vec<Entry> {
        self.read_entries(SLOT_MEALS)
    }

    fn save_meal(&mut self, entry: &Entry) -> Result<()> {
        let mut entries = self.read_entries(SLOT_MEALS);
        entries.push(entry.clone());
        self.write_entries(SLOT_MEALS, &entries)
    }

    fn remove_meal(&mut self, id: &Uuid) -> Result<()> {
        let mut entries = self.read_entries(SLOT_MEALS);
        entries.retain(|entry| entry.id != *id);
        self.write_entries(SLOT_MEALS, &entries)
    }

    fn workouts(&self) -> Vec<Entry> {
        self.read_entries(SLOT_WORKOUTS)
    }

    fn save_workout(&mut self, entry: &Entry) -> Result<()> {
        let mut entries = self.read_entries(SLOT_WORKOUTS);
        entries.push(entry.clone());
        self.write_entries(SLOT_WORKOUTS, &entries)
    }

    fn remove_workout(&mut self, id: &Uuid) -> Result<()> {
        let mut entries = self.read_entries(SLOT_WORKOUTS);
        entries.retain(|entry| entry.id != *id);
        self.write_entries(SLOT_WORKOUTS, &entries)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.slots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.calorie_limit(2000), 2000);
        assert_eq!(store.total_calories(0), 0);
        assert!(store.meals().is_empty());
        assert!(store.workouts().is_empty());
    }

    #[test]
    fn test_malformed_slots_degrade_to_defaults() {
        let mut store = MemoryStore::new();
        store.set_raw("calorie_limit", "not-a-number");
        store.set_raw("meals", "{broken json");
        assert_eq!(store.calorie_limit(2000), 2000);
        assert!(store.meals().is_empty());
    }

    #[test]
    fn test_save_and_remove_meal() {
        let mut store = MemoryStore::new();
        let eggs = Entry::new("Eggs", 300);
        let toast = Entry::new("Toast", 150);
        store.save_meal(&eggs).unwrap();
        store.save_meal(&toast).unwrap();
        assert_eq!(store.meals().len(), 2);

        store.remove_meal(&eggs.id).unwrap();
        let meals = store.meals();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Toast");
    }

    #[test]
    fn test_clear_all_wipes_every_slot() {
        let mut store = MemoryStore::new();
        store.set_calorie_limit(1800).unwrap();
        store.update_calories(500).unwrap();
        store.save_meal(&Entry::new("Eggs", 300)).unwrap();
        store.save_workout(&Entry::new("Run", 200)).unwrap();

        store.clear_all().unwrap();
        assert_eq!(store.calorie_limit(2000), 2000);
        assert_eq!(store.total_calories(0), 0);
        assert!(store.meals().is_empty());
        assert!(store.workouts().is_empty());
    }
}
