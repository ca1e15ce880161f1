//! Handlers for `meal` and `workout` subcommands.
//!
//! The two entry kinds share every handler; the kind only decides
//! which tracker list a call lands in. Name validation happens here,
//! upstream of the core, which accepts what it is given.

use uuid::Uuid;

use kcal_core::Entry;

use crate::app::AppContext;
use crate::cli::{AddArgs, ListArgs, RemoveArgs};
use crate::output::{entries_json, print_entry_table};

/// Which tracker list a command operates on.
#[derive(Debug, Clone, Copy)]
pub enum EntryKind {
    Meal,
    Workout,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Meal => "meal",
            EntryKind::Workout => "workout",
        }
    }
}

pub fn handle_add(ctx: &AppContext, kind: EntryKind, args: &AddArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(anyhow::anyhow!("Name must not be empty"));
    }

    let mut tracker = ctx.open_tracker()?;
    let id = match kind {
        EntryKind::Meal => tracker.add_meal(name, args.calories)?,
        EntryKind::Workout => tracker.add_workout(name, args.calories)?,
    };

    if ctx.quiet() {
        println!("{}", id);
    } else {
        println!(
            "Logged {} \"{}\" ({} kcal), id {}",
            kind.label(),
            name,
            args.calories,
            id
        );
        println!(
            "Total: {} kcal, remaining: {} kcal",
            tracker.total_calories(),
            tracker.calories_remaining()
        );
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, kind: EntryKind, args: &RemoveArgs) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&args.id)
        .map_err(|_| anyhow::anyhow!("Invalid id \"{}\" (expected a UUID)", args.id))?;

    let mut tracker = ctx.open_tracker()?;
    let removed = match kind {
        EntryKind::Meal => tracker.remove_meal(&id)?,
        EntryKind::Workout => tracker.remove_workout(&id)?,
    };

    if !ctx.quiet() {
        if removed {
            println!(
                "Removed {} {}. Total: {} kcal",
                kind.label(),
                id,
                tracker.total_calories()
            );
        } else {
            println!("No {} with id {}; nothing removed.", kind.label(), id);
        }
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, kind: EntryKind, args: &ListArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let entries = match kind {
        EntryKind::Meal => tracker.meals(),
        EntryKind::Workout => tracker.workouts(),
    };

    let filtered: Vec<Entry> = match args.filter {
        Some(ref needle) => {
            let needle = needle.to_lowercase();
            entries
                .iter()
                .filter(|entry| entry.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => entries.to_vec(),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries_json(&filtered))?
        );
        return Ok(());
    }

    print_entry_table(&filtered, kind.label(), ctx.quiet());
    Ok(())
}
