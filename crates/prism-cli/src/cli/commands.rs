use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::VariantArg;

/// Available prism subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate bundler configurations
    ///
    /// Assembles one configuration per variant and prints them as a JSON
    /// array. Variants that fail are reported and make the command exit
    /// with a non-zero status; the others are still emitted.
    Generate(GenerateArgs),

    /// List the variant catalog
    ///
    /// Prints every variant in emission order with its module format and
    /// environment mode.
    List(ListArgs),

    /// Validate the manifest and configuration
    ///
    /// Loads package.json and the prism config, runs schema validation, and
    /// shows which packages each variant externalizes.
    Check(CheckArgs),

    /// Explain how a module is treated by each variant
    ///
    /// Prints, per variant, whether an import of MODULE would be left
    /// external or bundled.
    Explain(ExplainArgs),
}

/// Where to read the library's inputs from. Shared by every command that
/// needs a manifest.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the library's package.json
    #[arg(short, long, default_value = "package.json", value_name = "FILE")]
    pub manifest: PathBuf,

    /// Path to a prism config file (prism.toml, or a package.json with a
    /// "prism" field)
    ///
    /// When omitted, prism.toml and then the manifest's "prism" field are
    /// searched next to the manifest. Built-in defaults apply if neither
    /// exists.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("package.json"),
            config: None,
        }
    }
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only generate these variants (repeatable)
    ///
    /// Output keeps catalog order regardless of the order given.
    ///
    /// Examples:
    ///   prism generate --variant esm
    ///   prism generate --variant umd-development --variant umd-production
    #[arg(long = "variant", value_enum, value_name = "VARIANT")]
    pub variants: Vec<VariantArg>,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the explain command
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Module specifier to classify, e.g. `react` or `react-dom/server`
    #[arg(value_name = "MODULE")]
    pub module: String,

    #[command(flatten)]
    pub input: InputArgs,
}
