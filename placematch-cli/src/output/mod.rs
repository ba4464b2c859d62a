//! Output formatting module

use anyhow::Result;
use placematch_core::MatchEvent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single match
    fn format_match(&mut self, event: &MatchEvent) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod jsonl;
pub mod text;

pub use json::JsonFormatter;
pub use jsonl::JsonLinesFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per match
    #[default]
    Text,
    /// JSON array of match objects
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Jsonl];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one tab-separated line per match with a context snippet",
            OutputFormat::Json => "JSON array of match objects, written when the run ends",
            OutputFormat::Jsonl => "one JSON object per match, written as matches arrive",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Jsonl => Box::new(JsonLinesFormatter::new(writer)),
    }
}
