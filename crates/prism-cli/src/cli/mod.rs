//! Command-line interface definition for prism.
//!
//! # Command Structure
//!
//! - `prism generate` - Emit the bundler configuration for every variant
//! - `prism list` - Show the variant catalog
//! - `prism check` - Validate the manifest and config
//! - `prism explain` - Show which variants externalize a module

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ExplainArgs, GenerateArgs, InputArgs, ListArgs};
pub use enums::*;

/// Prism - per-variant bundler configuration generator
#[derive(Parser, Debug)]
#[command(
    name = "prism",
    version,
    about = "Generate bundler configurations for every build variant of a library",
    long_about = "Prism reads a library's package.json and emits one bundler configuration\n\
                  per distributable variant: CommonJS and UMD in development and production\n\
                  modes, plus an ES module build. Externals, transforms, replacements and\n\
                  minification are decided per variant."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every per-variant decision: externals, transform plugins and
    /// stage lists.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
