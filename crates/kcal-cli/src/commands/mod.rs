//! Command handlers for the kcal CLI.

mod entry;
mod limit;
mod misc;
mod reset;
mod status;

pub use entry::{handle_add, handle_list, handle_remove, EntryKind};
pub use limit::handle_limit;
pub use misc::handle_completions;
pub use reset::handle_reset;
pub use status::handle_status;
