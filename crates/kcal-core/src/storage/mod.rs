//! Durable storage for tracker state.
//!
//! The store is a set of named slots (daily limit, running total, meal
//! list, workout list) behind the [`TrackerStore`] trait, so the
//! tracker core works against any backend without changes.

mod memory;
mod sqlite;
mod traits;
mod types;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TrackerStore;
pub use types::{Entry, StoreMetadata};
