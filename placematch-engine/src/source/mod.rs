//! Line-oriented message sources
//!
//! Two interchangeable variants produce the same sequence of raw lines:
//! [`FileSource`] reads a file sequentially, [`MappedSource`] walks a
//! memory region that has been decoded up front. Lines are split on `\n`
//! with a trailing `\r` removed, and a final line without a terminator is
//! still produced. Each source belongs to exactly one query task.

pub mod mapped;
pub mod stream;

pub use mapped::{MappedRegion, MappedSource};
pub use stream::FileSource;

use crate::encoding::Encoding;
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// One raw line and its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based physical line number
    pub number: u64,
    /// Line text without its terminator
    pub text: String,
}

/// Lazy sequence of raw message lines
pub trait MessageSource: Send {
    /// Whether another line is available
    fn has_next(&mut self) -> Result<bool>;

    /// Next line, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<RawLine>>;

    /// Release the underlying resource.
    ///
    /// Returns `true` only for the call that actually released it; later
    /// calls are no-ops.
    fn close(&mut self) -> bool;

    /// Whether the source has been closed
    fn is_closed(&self) -> bool;

    /// Path or description of the input, for diagnostics
    fn origin(&self) -> &str;
}

/// Opens a fresh [`MessageSource`] for each query task
pub trait SourceOpener: Send + Sync {
    /// Open a new independent source
    fn open(&self) -> Result<Box<dyn MessageSource>>;

    /// Path or description of the input
    fn describe(&self) -> String;
}

/// A message corpus and how to read it
#[derive(Clone)]
pub enum Corpus {
    /// Sequentially streamed file; every task opens its own handle
    File {
        /// Corpus path
        path: PathBuf,
        /// Declared encoding
        encoding: Encoding,
    },
    /// Region mapped once and shared read-only by every task
    Mapped {
        /// Shared region
        region: MappedRegion,
        /// Declared encoding
        encoding: Encoding,
    },
}

impl Corpus {
    /// Stream `path` line by line
    pub fn file(path: impl AsRef<Path>, encoding: Encoding) -> Self {
        Corpus::File {
            path: path.as_ref().to_path_buf(),
            encoding,
        }
    }

    /// Map `path` into memory once
    pub fn mapped(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        Ok(Corpus::Mapped {
            region: MappedRegion::map_file(path)?,
            encoding,
        })
    }

    /// Use an already-resident region
    pub fn from_region(region: MappedRegion, encoding: Encoding) -> Self {
        Corpus::Mapped { region, encoding }
    }
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corpus::File { path, encoding } => f
                .debug_struct("Corpus::File")
                .field("path", path)
                .field("encoding", encoding)
                .finish(),
            Corpus::Mapped { region, encoding } => f
                .debug_struct("Corpus::Mapped")
                .field("origin", &region.origin())
                .field("length", &region.len())
                .field("encoding", encoding)
                .finish(),
        }
    }
}

impl SourceOpener for Corpus {
    fn open(&self) -> Result<Box<dyn MessageSource>> {
        match self {
            Corpus::File { path, encoding } => Ok(Box::new(FileSource::open(path, *encoding)?)),
            Corpus::Mapped { region, encoding } => {
                Ok(Box::new(MappedSource::open(region.clone(), *encoding)?))
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Corpus::File { path, .. } => path.display().to_string(),
            Corpus::Mapped { region, .. } => format!("{} (mapped)", region.origin()),
        }
    }
}

/// Strip one trailing `\n` and then one trailing `\r`
pub(crate) fn trim_terminator(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
