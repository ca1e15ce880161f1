//! The balance dashboard.

use crate::app::AppContext;
use crate::cli::StatusArgs;
use crate::output::{print_status, status_json};

pub fn handle_status(ctx: &AppContext, args: &StatusArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status_json(&tracker))?);
        return Ok(());
    }

    print_status(&tracker, ctx.quiet());
    Ok(())
}
