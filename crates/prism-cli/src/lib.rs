//! Prism CLI - generates bundler configurations for every distributable
//! variant of a compiled component library.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `generate`, `list`, `check` and `explain`
//! - [`error`] - CLI error type with hints, converted to miette reports
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Colored status lines on stderr
//!
//! The heavy lifting lives in `prism-variants`; this crate loads the inputs,
//! prints results, and maps failures to an exit status.
//!
//! # Example
//!
//! ```rust,no_run
//! use prism_cli::{cli::GenerateArgs, commands, logger};
//!
//! logger::init_logger(false, false, false, None);
//! commands::generate_execute(GenerateArgs::default()).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
