//! Show or set the daily calorie limit.

use crate::app::AppContext;
use crate::cli::LimitArgs;

pub fn handle_limit(ctx: &AppContext, args: &LimitArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;

    match args.value {
        Some(value) => {
            tracker.set_limit(value)?;
            if !ctx.quiet() {
                println!(
                    "Daily limit set to {} kcal ({} kcal remaining)",
                    value,
                    tracker.calories_remaining()
                );
            }
        }
        None => {
            if ctx.quiet() {
                println!("{}", tracker.limit());
            } else {
                println!("Daily limit: {} kcal", tracker.limit());
            }
        }
    }
    Ok(())
}
