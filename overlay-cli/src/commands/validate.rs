//! Validate command implementation

use super::init_logging;
use crate::error::CliError;
use crate::input::resolve_patterns;
use anyhow::{Context, Result};
use clap::Args;
use overlay_engine::{validate_chunks, Input};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Page JSON files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let files = resolve_patterns(&self.input)?;
        let mut failed_files = 0;
        let mut total_warnings = 0;

        for path in &files {
            let page = Input::from_file(path)
                .into_page()
                .with_context(|| format!("Failed to read page {}", path.display()))?;
            let warnings = validate_chunks(&page.chunks);

            if warnings.is_empty() {
                println!("✓ {} ({} chunks)", path.display(), page.chunks.len());
                continue;
            }

            failed_files += 1;
            total_warnings += warnings.len();
            println!("✗ {}", path.display());
            for warning in &warnings {
                println!("  {warning}");
            }
        }

        if failed_files > 0 {
            return Err(CliError::ValidationFailed {
                files: failed_files,
                warnings: total_warnings,
            }
            .into());
        }
        Ok(())
    }
}
