//! Sequential file source

use super::{trim_terminator, MessageSource, RawLine};
use crate::encoding::Encoding;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a file line by line through a buffered handle
#[derive(Debug)]
pub struct FileSource {
    origin: String,
    reader: Option<BufReader<File>>,
    encoding: Encoding,
    line: u64,
    peeked: Option<RawLine>,
    buffer: Vec<u8>,
}

impl FileSource {
    /// Open `path` for sequential reading
    pub fn open(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| EngineError::SourceUnavailable {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            origin,
            reader: Some(BufReader::new(file)),
            encoding,
            line: 0,
            peeked: None,
            buffer: Vec::new(),
        })
    }

    fn read_raw(&mut self) -> Result<Option<RawLine>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.buffer.clear();
        let read = reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| EngineError::ReadFailure {
                origin: self.origin.clone(),
                line: self.line,
                reason: e.to_string(),
            })?;
        if read == 0 {
            return Ok(None);
        }

        self.line += 1;
        let text = self
            .encoding
            .decode(trim_terminator(&self.buffer))
            .map_err(|_| EngineError::DecodeFailure {
                origin: self.origin.clone(),
                line: self.line,
                encoding: self.encoding,
            })?;

        Ok(Some(RawLine {
            number: self.line,
            text: text.to_string(),
        }))
    }
}

impl MessageSource for FileSource {
    fn has_next(&mut self) -> Result<bool> {
        if self.peeked.is_none() {
            self.peeked = self.read_raw()?;
        }
        Ok(self.peeked.is_some())
    }

    fn next_line(&mut self) -> Result<Option<RawLine>> {
        match self.peeked.take() {
            Some(line) => Ok(Some(line)),
            None => self.read_raw(),
        }
    }

    fn close(&mut self) -> bool {
        self.peeked = None;
        self.reader.take().is_some()
    }

    fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
