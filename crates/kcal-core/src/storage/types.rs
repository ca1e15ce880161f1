//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, calorie-valued record.
///
/// The same shape serves both lists: an entry in the meal list counts
/// toward the running total, an entry in the workout list counts
/// against it. Entries are immutable once created; the only mutation
/// is removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within its list
    pub id: Uuid,

    /// User-facing name (e.g. "Eggs", "Morning run")
    pub name: String,

    /// Calorie value; non-negative by construction
    pub calories: u32,
}

impl Entry {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
        }
    }
}

/// Metadata for a tracker store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "0.1")
    pub format_version: String,

    /// When this store was created
    pub created_at: DateTime<Utc>,
}
