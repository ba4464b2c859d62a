//! Memory-region source

use super::{trim_terminator, MessageSource, RawLine};
use crate::encoding::Encoding;
use crate::error::{EngineError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// A readable memory region shared by any number of sources
///
/// Cloning is cheap; every clone sees the same bytes.
#[derive(Clone)]
pub struct MappedRegion {
    origin: Arc<str>,
    bytes: Arc<dyn AsRef<[u8]> + Send + Sync>,
}

impl MappedRegion {
    /// Map a file read-only
    pub fn map_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let unavailable = |e: std::io::Error| EngineError::SourceUnavailable {
            origin: origin.clone(),
            reason: e.to_string(),
        };

        let file = File::open(path).map_err(unavailable)?;
        let len = file.metadata().map_err(unavailable)?.len();
        if len == 0 {
            return Ok(Self::from_bytes(origin, Vec::new()));
        }

        // SAFETY: the corpus must not be truncated or rewritten while mapped.
        let map = unsafe { Mmap::map(&file) }.map_err(unavailable)?;
        log::debug!("mapped {origin} ({len} bytes)");

        Ok(Self {
            origin: origin.into(),
            bytes: Arc::new(map),
        })
    }

    /// Wrap bytes that are already resident
    pub fn from_bytes(origin: impl Into<String>, bytes: impl AsRef<[u8]> + Send + Sync + 'static) -> Self {
        Self {
            origin: origin.into().into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Path or description of the region
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Region contents
    pub fn as_bytes(&self) -> &[u8] {
        (*self.bytes).as_ref()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the region is empty
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Walks the lines of a [`MappedRegion`]
///
/// The whole region is decoded when the source is opened, so an invalid
/// byte anywhere fails the open rather than a later read.
pub struct MappedSource {
    region: Option<MappedRegion>,
    position: usize,
    line: u64,
}

impl MappedSource {
    /// Decode `region` with `encoding` and position at its first line
    pub fn open(region: MappedRegion, encoding: Encoding) -> Result<Self> {
        if let Err(offset) = encoding.decode(region.as_bytes()) {
            let bytes = region.as_bytes();
            let line = bytes[..offset].iter().filter(|&&b| b == b'\n').count() as u64 + 1;
            return Err(EngineError::DecodeFailure {
                origin: region.origin().to_string(),
                line,
                encoding,
            });
        }

        Ok(Self {
            region: Some(region),
            position: 0,
            line: 0,
        })
    }
}

impl MessageSource for MappedSource {
    fn has_next(&mut self) -> Result<bool> {
        Ok(self
            .region
            .as_ref()
            .is_some_and(|r| self.position < r.len()))
    }

    fn next_line(&mut self) -> Result<Option<RawLine>> {
        let Some(region) = self.region.as_ref() else {
            return Ok(None);
        };
        let bytes = region.as_bytes();
        if self.position >= bytes.len() {
            return Ok(None);
        }

        let rest = &bytes[self.position..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .map_or(rest.len(), |i| i + 1);
        self.position += end;
        self.line += 1;

        // already validated at open; slicing at '\n' keeps char boundaries
        let text = std::str::from_utf8(trim_terminator(&rest[..end])).map_err(|e| {
            EngineError::ReadFailure {
                origin: region.origin().to_string(),
                line: self.line,
                reason: e.to_string(),
            }
        })?;

        Ok(Some(RawLine {
            number: self.line,
            text: text.to_string(),
        }))
    }

    fn close(&mut self) -> bool {
        self.region.take().is_some()
    }

    fn is_closed(&self) -> bool {
        self.region.is_none()
    }

    fn origin(&self) -> &str {
        self.region.as_ref().map_or("<closed>", |r| r.origin())
    }
}
