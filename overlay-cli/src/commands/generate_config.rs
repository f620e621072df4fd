//! Generate-config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let text = toml::to_string_pretty(&CliConfig::default())
            .context("Failed to serialize default configuration")?;

        match &self.output {
            Some(path) => fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
