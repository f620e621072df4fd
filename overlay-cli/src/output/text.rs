//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use overlay_engine::Output;
use std::io::Write;

/// Plain text formatter - outputs one line per highlight region
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_page(&mut self, source: &str, output: &Output) -> Result<()> {
        let stats = &output.metadata.stats;
        writeln!(
            self.writer,
            "# {source}: {} of {} chunks",
            stats.output, stats.input
        )?;

        for chunk in &output.page.chunks {
            match chunk.bounding_box {
                Some(bbox) => writeln!(
                    self.writer,
                    "{}\ttop={} left={} width={} height={}",
                    chunk.id, bbox.top, bbox.left, bbox.width, bbox.height
                )?,
                None => writeln!(self.writer, "{}\t-", chunk.id)?,
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
