//! SQLite storage backend.
//!
//! A plain file-backed database with two tables: `slots`, the
//! key-value surface behind [`TrackerStore`], and `meta`, which pins
//! the on-disk format version. Slot values are stored as text: numeric
//! strings for the scalars, JSON arrays for the entry lists.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::storage::traits::{
    TrackerStore, SLOT_CALORIE_LIMIT, SLOT_MEALS, SLOT_TOTAL_CALORIES, SLOT_WORKOUTS,
};
use crate::storage::types::{Entry, StoreMetadata};

const FORMAT_VERSION: &str = "0.1";

/// SQLite-backed tracker store.
pub struct SqliteStore {
    #[allow(dead_code)]
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open a store at the given path, creating it if absent.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let is_new = !path.exists();
        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        if is_new {
            let created_at = Utc::now().to_rfc3339();
            conn.execute(
                "INSERT INTO meta (key, value) VALUES (?, ?)",
                ["format_version", FORMAT_VERSION],
            )?;
            conn.execute(
                "INSERT INTO meta (key, value) VALUES (?, ?)",
                ["created_at", &created_at],
            )?;
        } else {
            let version: Option<String> = conn
                .query_row(
                    "SELECT value FROM meta WHERE key = 'format_version'",
                    [],
                    |row| row.get(0),
                )
                .optional()?;
            match version.as_deref() {
                Some(FORMAT_VERSION) => {}
                Some(other) => {
                    return Err(TrackerError::Storage(format!(
                        "Unsupported store format version: {}",
                        other
                    )))
                }
                None => {
                    return Err(TrackerError::Storage(
                        "Store is missing format metadata".to_string(),
                    ))
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Get store metadata.
    pub fn metadata(&self) -> Result<StoreMetadata> {
        let format_version: String = self.conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;
        let created_at_str: String = self.conn.query_row(
            "SELECT value FROM meta WHERE key = 'created_at'",
            [],
            |row| row.get(0),
        )?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| TrackerError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);
        Ok(StoreMetadata {
            format_version,
            created_at,
        })
    }

    fn read_slot(&self, key: &str) -> Option<String> {
        self.conn
            .query_row("SELECT value FROM slots WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
            .ok()
            .flatten()
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            [key, value],
        )?;
        Ok(())
    }

    fn read_entries(&self, key: &str) -> Vec<Entry> {
        // Malformed JSON is treated the same as an absent slot.
        self.read_slot(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_entries(&mut self, key: &str, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.write_slot(key, &raw)
    }

    fn append_entry(&mut self, key: &str, entry: &Entry) -> Result<()> {
        let mut entries = self.read_entries(key);
        entries.push(entry.clone());
        self.write_entries(key, &entries)
    }

    fn remove_entry(&mut self, key: &str, id: &Uuid) -> Result<()> {
        let mut entries = self.read_entries(key);
        entries.retain(|entry| entry.id != *id);
        self.write_entries(key, &entries)
    }
}

impl TrackerStore for SqliteStore {
    fn calorie_limit(&self, default: u32) -> u32 {
        self.read_slot(SLOT_CALORIE_LIMIT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default)
    }

    fn set_calorie_limit(&mut self, value: u32) -> Result<()> {
        self.write_slot(SLOT_CALORIE_LIMIT, &value.to_string())
    }

    fn total_calories(&self, default: i64) -> i64 {
        self.read_slot(SLOT_TOTAL_CALORIES)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default)
    }

    fn update_calories(&mut self, value: i64) -> Result<()> {
        self.write_slot(SLOT_TOTAL_CALORIES, &value.to_string())
    }

    fn meals(&self) -> Vec<Entry> {
        self.read_entries(SLOT_MEALS)
    }

    fn save_meal(&mut self, entry: &Entry) -> Result<()> {
        self.append_entry(SLOT_MEALS, entry)
    }

    fn remove_meal(&mut self, id: &Uuid) -> Result<()> {
        self.remove_entry(SLOT_MEALS, id)
    }

    fn workouts(&self) -> Vec<Entry> {
        self.read_entries(SLOT_WORKOUTS)
    }

    fn save_workout(&mut self, entry: &Entry) -> Result<()> {
        self.append_entry(SLOT_WORKOUTS, entry)
    }

    fn remove_workout(&mut self, id: &Uuid) -> Result<()> {
        self.remove_entry(SLOT_WORKOUTS, id)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM slots", [])?;
        Ok(())
    }
}
