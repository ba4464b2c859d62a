//! Place queries, messages and match events

use crate::error::{CoreError, Result};
use crate::token::{normalize, tokenize};
use serde::{Deserialize, Serialize};

/// Separator between message ID and text in a record line
pub const RECORD_SEPARATOR: char = '\t';

/// Immutable place-name query
///
/// Holds the display name and its ordered, non-empty token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    full_name: String,
    tokens: Vec<String>,
}

impl PlaceQuery {
    /// Build a query by tokenizing the full name
    pub fn new(full_name: impl Into<String>) -> Result<Self> {
        let full_name = full_name.into();
        let tokens: Vec<String> = tokenize(&full_name).into_iter().map(|t| t.norm).collect();
        Self::from_tokens(full_name, tokens)
    }

    /// Build a query from pre-split tokens
    ///
    /// Tokens are normalized the same way message tokens are; tokens that
    /// normalize to nothing are dropped.
    pub fn from_tokens<I, S>(full_name: impl Into<String>, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let full_name = full_name.into();
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(CoreError::EmptyPlaceName(full_name));
        }

        Ok(Self { full_name, tokens })
    }

    /// Display name of the place
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Normalized name tokens (never empty)
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens in the name
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// One tokenized message record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    line: u64,
    words: Vec<String>,
    tokens: Vec<String>,
}

impl Message {
    /// Parse a raw record line.
    ///
    /// Records are `<id>\t<text>`. Without a separator the 1-based line
    /// number becomes the ID and the whole line is the text.
    pub fn parse(line: u64, raw: &str) -> Self {
        let raw = raw.trim_end_matches(['\r', '\n']);
        let (id, text) = match raw.split_once(RECORD_SEPARATOR) {
            Some((id, text)) if !id.trim().is_empty() => (id.trim().to_string(), text),
            Some((_, text)) => (line.to_string(), text),
            None => (line.to_string(), raw),
        };

        Self::from_text(id, line, text)
    }

    /// Build a message from an ID and free text
    pub fn from_text(id: impl Into<String>, line: u64, text: &str) -> Self {
        let (words, tokens): (Vec<String>, Vec<String>) = tokenize(text)
            .into_iter()
            .map(|t| (t.raw, t.norm))
            .unzip();

        Self {
            id: id.into(),
            line,
            words,
            tokens,
        }
    }

    /// Message identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Physical line number the record came from (1-based)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Normalized content tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Raw words, index-aligned with `tokens`
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Reconstruct the text around a window.
    ///
    /// Returns the raw words of `[start, start + len)` widened by `context`
    /// words on each side, clamped to the message.
    pub fn snippet(&self, start: usize, len: usize, context: usize) -> String {
        let begin = start.saturating_sub(context).min(self.words.len());
        let end = start
            .saturating_add(len)
            .saturating_add(context)
            .min(self.words.len());
        self.words[begin..end].join(" ")
    }
}

/// A matched window, handed to the output collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Full display name of the matched place
    pub place: String,
    /// Message identifier
    pub message_id: String,
    /// Line number of the message record
    pub line: u64,
    /// Token offset of the window start
    pub offset: usize,
    /// Window text with surrounding context
    pub snippet: String,
}

impl MatchEvent {
    /// Build an event for a window of `query` in `message`
    pub fn new(query: &PlaceQuery, message: &Message, offset: usize, context: usize) -> Self {
        Self {
            place: query.full_name().to_string(),
            message_id: message.id().to_string(),
            line: message.line(),
            offset,
            snippet: message.snippet(offset, query.len(), context),
        }
    }
}
