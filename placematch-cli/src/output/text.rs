//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use placematch_core::MatchEvent;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated line per match
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, event: &MatchEvent) -> Result<()> {
        writeln!(
            self.writer,
            "@@@Place Name:{}\tMatched part in Message({})\tFor \"...{}...\"",
            event.place, event.message_id, event.snippet
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
