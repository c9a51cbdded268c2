//! Command implementations for the prism CLI.
//!
//! - [`generate`] - Emit per-variant bundler configurations
//! - [`list`] - Show the variant catalog
//! - [`check`] - Validate manifest and config
//! - [`explain`] - Classify one module across variants
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod explain;
pub mod generate;
pub mod list;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use explain::execute as explain_execute;
pub use generate::execute as generate_execute;
pub use list::execute as list_execute;

use crate::cli::Command;

/// `settings.log_level` from the config the command would load.
///
/// Best effort: any load failure yields `None` and is reported later by the
/// command itself.
pub fn configured_log_level(command: &Command) -> Option<String> {
    let input = match command {
        Command::Generate(args) => &args.input,
        Command::Check(args) => &args.input,
        Command::Explain(args) => &args.input,
        Command::List(_) => return None,
    };
    utils::load_config(input).ok()?.settings.log_level
}
