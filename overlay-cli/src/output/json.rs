//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use overlay_engine::{AlignFlag, AlignmentStats, Chunk, ChunkWarning, Output};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs resolved pages as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    pages: Vec<PageData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// Input file the page came from
    pub source: String,
    /// Owning document, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Page number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Align flag used
    pub align: AlignFlag,
    /// Resolved chunks
    pub chunks: Vec<Chunk>,
    /// Alignment counters
    pub stats: AlignmentStats,
    /// Validation findings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ChunkWarning>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            pages: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_page(&mut self, source: &str, output: &Output) -> Result<()> {
        self.pages.push(PageData {
            source: source.to_string(),
            document_id: output.page.document_id.clone(),
            page_number: output.page.page_number,
            align: output.metadata.align,
            chunks: output.page.chunks.clone(),
            stats: output.metadata.stats,
            warnings: output.metadata.warnings.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.pages)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.pages)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
