//! Wipe the tracker: zero the total, empty both lists, clear every
//! durable slot (limit included).

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::ResetArgs;

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err(anyhow::anyhow!(
                "Refusing to reset without confirmation; pass --yes in non-interactive use"
            ));
        }
        let confirmed = Confirm::new()
            .with_prompt("Reset the tracker? This wipes all meals, workouts and the limit")
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                println!("Aborted.");
            }
            return Ok(());
        }
    }

    let mut tracker = ctx.open_tracker()?;
    tracker.reset()?;

    if !ctx.quiet() {
        println!("Tracker reset. Total is 0 kcal; limit returns to the default on next run.");
    }
    Ok(())
}
