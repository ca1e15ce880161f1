//! # kcal Core
//!
//! Core library for kcal - a local, persistent calorie-balance tracker.
//!
//! This crate provides the state-and-persistence engine independent of
//! the CLI interface: the tracker's in-memory ledger of meals,
//! workouts, daily limit and running total, plus the durable store it
//! writes through to.
//!
//! ## Architecture
//!
//! - **storage**: Durable slot store trait and implementations
//! - **tracker**: The in-memory ledger and its derivation rules
//!
//! The invariant the tracker maintains at all times: the running total
//! equals the sum of meal calories minus the sum of workout calories.

pub mod error;
pub mod storage;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use storage::{Entry, MemoryStore, SqliteStore, TrackerStore};
pub use tracker::{Tracker, DEFAULT_CALORIE_LIMIT};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
