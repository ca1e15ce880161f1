//! Storage trait definition.
//!
//! The `TrackerStore` trait defines the interface that all storage
//! backends must implement. This abstraction lets the tracker core
//! support multiple backends (SQLite, in-memory) without changing the
//! core logic.

use uuid::Uuid;

use super::types::Entry;
use crate::error::Result;

/// Slot key for the daily calorie limit (numeric string).
pub const SLOT_CALORIE_LIMIT: &str = "calorie_limit";
/// Slot key for the running total (numeric string).
pub const SLOT_TOTAL_CALORIES: &str = "total_calories";
/// Slot key for the meal list (JSON array).
pub const SLOT_MEALS: &str = "meals";
/// Slot key for the workout list (JSON array).
pub const SLOT_WORKOUTS: &str = "workouts";

/// Durable slot store for tracker state.
///
/// The store holds four named slots: the calorie limit, the running
/// total, the meal list, and the workout list. All implementations
/// must ensure:
/// - Reads never fail: an absent or malformed slot degrades to the
///   caller-supplied default (empty for the lists)
/// - Writes are synchronous; when a write returns `Ok`, the slot is
///   durable
///
/// Single-writer use is assumed; there is no cross-process locking.
pub trait TrackerStore {
    /// Get the stored calorie limit, or `default` if absent.
    fn calorie_limit(&self, default: u32) -> u32;

    /// Overwrite the stored calorie limit.
    fn set_calorie_limit(&mut self, value: u32) -> Result<()>;

    /// Get the stored running total, or `default` if absent.
    fn total_calories(&self, default: i64) -> i64;

    /// Overwrite the stored running total.
    fn update_calories(&mut self, value: i64) -> Result<()>;

    /// Get the stored meal list; empty if absent or malformed.
    fn meals(&self) -> Vec<Entry>;

    /// Append an entry to the durable meal list (read-modify-write).
    fn save_meal(&mut self, entry: &Entry) -> Result<()>;

    /// Remove every meal with the given id, rewriting the list.
    fn remove_meal(&mut self, id: &Uuid) -> Result<()>;

    /// Get the stored workout list; empty if absent or malformed.
    fn workouts(&self) -> Vec<Entry>;

    /// Append an entry to the durable workout list.
    fn save_workout(&mut self, entry: &Entry) -> Result<()>;

    /// Remove every workout with the given id, rewriting the list.
    fn remove_workout(&mut self, id: &Uuid) -> Result<()>;

    /// Erase every slot in the store (full wipe, not selective).
    fn clear_all(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        // Ensures the trait is object-safe enough to use as a bound.
        fn _accepts_store<T: TrackerStore>(_store: T) {}
    }
}
