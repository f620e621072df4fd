//! Output formatting module

use anyhow::Result;
use overlay_engine::Output;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the resolved chunks of one page
    fn format_page(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per highlight region
    #[default]
    Text,
    /// JSON array of resolved pages with statistics
    Json,
    /// Markdown table per page
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per highlight region",
            OutputFormat::Json => "JSON array of resolved pages with statistics",
            OutputFormat::Markdown => "markdown table per page",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}
