use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use kcal_core::VERSION;

/// kcal - a local, persistent calorie-balance tracker
#[derive(Parser)]
#[command(name = "kcal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tracker database
    #[arg(short, long, global = true, env = "KCAL_PATH")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for `meal add` / `workout add`
#[derive(Args)]
pub struct AddArgs {
    /// Entry name (e.g. "Eggs", "Morning run")
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Calorie value
    #[arg(value_name = "CALORIES")]
    pub calories: u32,
}

/// Arguments for `meal remove` / `workout remove`
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for `meal list` / `workout list`
#[derive(Args)]
pub struct ListArgs {
    /// Show only entries whose name contains SUBSTRING (case-insensitive)
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command
#[derive(Args, Default)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `limit` command
#[derive(Args)]
pub struct LimitArgs {
    /// New daily calorie limit; omit to show the current one
    #[arg(value_name = "VALUE")]
    pub value: Option<u32>,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum EntryCommands {
    /// Log a new entry
    Add(AddArgs),

    /// Remove an entry by ID
    Remove(RemoveArgs),

    /// List entries
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the day's balance (default when no command is given)
    Status(StatusArgs),

    /// Log or manage meals (calories consumed)
    #[command(subcommand)]
    Meal(EntryCommands),

    /// Log or manage workouts (calories burned)
    #[command(subcommand)]
    Workout(EntryCommands),

    /// Show or set the daily calorie limit
    Limit(LimitArgs),

    /// Zero the balance and wipe the store
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
