//! Output formatting helpers for the CLI.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use owo_colors::OwoColorize;

use kcal_core::{Entry, Tracker, TrackerStore};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Render the balance numbers as a JSON object.
pub fn status_json<S: TrackerStore>(tracker: &Tracker<S>) -> serde_json::Value {
    serde_json::json!({
        "limit": tracker.limit(),
        "total": tracker.total_calories(),
        "consumed": tracker.calories_consumed(),
        "burned": tracker.calories_burned(),
        "remaining": tracker.calories_remaining(),
        "progress_percentage": tracker.progress_percentage(),
        "over_limit": tracker.is_over_limit(),
        "meals": tracker.meals().len(),
        "workouts": tracker.workouts().len(),
    })
}

/// Render a fixed-width textual progress bar for the given percentage.
///
/// Negative percentages render empty; the tracker already caps the
/// upper bound at 100.
pub fn progress_bar(percentage: f64) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Print the balance dashboard in human-readable form.
pub fn print_status<S: TrackerStore>(tracker: &Tracker<S>, quiet: bool) {
    if quiet {
        println!("{}", tracker.total_calories());
        return;
    }

    println!("Daily limit:  {} kcal", tracker.limit());
    println!("Total:        {} kcal", tracker.total_calories());
    println!("Consumed:     {} kcal", tracker.calories_consumed());
    println!("Burned:       {} kcal", tracker.calories_burned());

    let remaining = format!("{} kcal", tracker.calories_remaining());
    if tracker.is_over_limit() {
        println!("Remaining:    {}", remaining.red().bold());
    } else {
        println!("Remaining:    {}", remaining.green());
    }

    let bar = progress_bar(tracker.progress_percentage());
    let bar = if tracker.is_over_limit() {
        bar.red().to_string()
    } else {
        bar.green().to_string()
    };
    println!("Progress:     {} {:.0}%", bar, tracker.progress_percentage());

    if tracker.is_over_limit() {
        println!("{}", "Over the daily limit".red().bold());
    }
}

/// Convert entries to a JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.id,
                "name": entry.name,
                "calories": entry.calories,
            })
        })
        .collect()
}

/// Print entries as a table, or one line per entry in quiet mode.
pub fn print_entry_table(entries: &[Entry], kind: &str, quiet: bool) {
    if entries.is_empty() {
        if !quiet {
            println!("No {}s logged.", kind);
        }
        return;
    }

    if quiet {
        for entry in entries {
            println!("{}\t{}\t{}", entry.id, entry.name, entry.calories);
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Name", "Calories"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(&entry.name),
            Cell::new(entry.calories),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(30)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(30)));
        // Negative progress renders as empty, not as a panic.
        assert_eq!(progress_bar(-85.0), format!("[{}]", "-".repeat(30)));
    }

    #[test]
    fn test_progress_bar_half() {
        let bar = progress_bar(50.0);
        assert_eq!(bar, format!("[{}{}]", "#".repeat(15), "-".repeat(15)));
    }
}
