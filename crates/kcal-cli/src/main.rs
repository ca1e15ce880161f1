//! kcal CLI - a local, persistent calorie-balance tracker.
//!
//! This is the view layer over the `kcal-core` engine: it validates
//! input, invokes the tracker's mutators, and re-reads the derived
//! values for display after each change.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod output;

use app::AppContext;
use cli::{Cli, Commands, EntryCommands, StatusArgs};
use commands::{
    handle_add, handle_completions, handle_limit, handle_list, handle_remove, handle_reset,
    handle_status, EntryKind,
};

fn dispatch_entry(ctx: &AppContext, kind: EntryKind, command: &EntryCommands) -> anyhow::Result<()> {
    match command {
        EntryCommands::Add(args) => handle_add(ctx, kind, args),
        EntryCommands::Remove(args) => handle_remove(ctx, kind, args),
        EntryCommands::List(args) => handle_list(ctx, kind, args),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(cli.data, cli.quiet);

    match cli.command {
        Some(Commands::Status(args)) => handle_status(&ctx, &args),
        Some(Commands::Meal(command)) => dispatch_entry(&ctx, EntryKind::Meal, &command),
        Some(Commands::Workout(command)) => dispatch_entry(&ctx, EntryKind::Workout, &command),
        Some(Commands::Limit(args)) => handle_limit(&ctx, &args),
        Some(Commands::Reset(args)) => handle_reset(&ctx, &args),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => handle_status(&ctx, &StatusArgs::default()),
    }
}
