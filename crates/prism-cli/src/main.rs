//! Prism CLI - per-variant bundler configuration generator.
//!
//! Parses arguments, sets up logging, and dispatches to the commands.

use clap::Parser;
use miette::Result;
use prism_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Configured log level only applies when no flag or RUST_LOG is given
    let configured_level = commands::configured_log_level(&args.command);
    logger::init_logger(args.verbose, args.quiet, args.no_color, configured_level.as_deref());
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::List(list_args) => commands::list_execute(list_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Explain(explain_args) => commands::explain_execute(explain_args),
    };

    result.map_err(error::cli_error_to_miette)
}
