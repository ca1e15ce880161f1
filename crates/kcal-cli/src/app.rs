//! Application context for the kcal CLI.
//!
//! Resolves where the tracker database lives and hydrates the tracker
//! for command handlers. Resolution order for the store path:
//! `--data` flag (or `KCAL_PATH` env, via clap) > config file > XDG
//! data default.

use std::path::PathBuf;

use kcal_core::{SqliteStore, Tracker};

use crate::config::{default_config_path, default_store_path, read_config};

pub struct AppContext {
    data: Option<String>,
    quiet: bool,
}

impl AppContext {
    pub fn new(data: Option<String>, quiet: bool) -> Self {
        Self { data, quiet }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Resolve the store path without touching the filesystem beyond
    /// the config file.
    pub fn resolve_store_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref data) = self.data {
            return Ok(PathBuf::from(data));
        }

        let config_path = default_config_path()?;
        if config_path.exists() {
            let config = read_config(&config_path)?;
            return Ok(PathBuf::from(config.store.path));
        }

        default_store_path()
    }

    /// Open the store and hydrate a tracker from it.
    pub fn open_tracker(&self) -> anyhow::Result<Tracker<SqliteStore>> {
        let path = self.resolve_store_path()?;
        let store = SqliteStore::open(&path)?;
        Ok(Tracker::hydrate(store)?)
    }
}
