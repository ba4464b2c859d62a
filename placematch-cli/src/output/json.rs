//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use placematch_core::MatchEvent;
use std::io::Write;

/// JSON formatter - outputs matches as a JSON array
///
/// Matches are buffered and written by [`OutputFormatter::finish`].
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    matches: Vec<MatchEvent>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            matches: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_match(&mut self, event: &MatchEvent) -> Result<()> {
        self.matches.push(event.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.matches)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.matches)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
