//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub mod align;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve overlapping chunk boxes in page files
    Align(align::AlignArgs),

    /// Check page files for malformed chunk geometry
    Validate(validate::ValidateArgs),

    /// Print a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List {
                subcommand: ListCommands::Formats,
            } => {
                for format in OutputFormat::ALL {
                    println!("{format:<10} {}", format.description());
                }
                Ok(())
            }
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still takes precedence over the verbosity default.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
