//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use overlay_engine::Output;
use std::io::Write;

/// Markdown formatter - outputs a table of highlight regions per page
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    page_count: usize,
    region_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            page_count: 0,
            region_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_page(&mut self, source: &str, output: &Output) -> Result<()> {
        self.page_count += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| id | top | left | width | height |")?;
        writeln!(self.writer, "|----|-----|------|-------|--------|")?;

        for chunk in &output.page.chunks {
            let Some(bbox) = chunk.bounding_box else {
                writeln!(self.writer, "| {} | | | | |", chunk.id)?;
                continue;
            };
            self.region_count += 1;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                chunk.id, bbox.top, bbox.left, bbox.width, bbox.height
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total highlights: {} across {} page(s)*",
            self.region_count, self.page_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
