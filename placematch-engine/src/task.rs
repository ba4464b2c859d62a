//! Query task: one place name against one pass over the corpus
//!
//! A task moves through `Created → Opening → Streaming → Draining → Closed`.
//! Whatever happens while opening or streaming, draining always runs and
//! releases the source, and a task that is dropped mid-stream (a panicking
//! sink, pool shutdown) releases it from `Drop`.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::sink::MatchSink;
use crate::source::{MessageSource, SourceOpener};
use placematch_core::{AlignStats, MatchEvent, Message, PlaceQuery, TokenAligner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a [`QueryTask`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    /// Constructed, no source yet
    Created,
    /// Acquiring the source
    Opening,
    /// Pulling, aligning and emitting
    Streaming,
    /// Releasing the source
    Draining,
    /// Terminal
    Closed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskState::Created => "created",
            TaskState::Opening => "opening",
            TaskState::Streaming => "streaming",
            TaskState::Draining => "draining",
            TaskState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// How a task ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum TaskOutcome {
    /// The whole corpus was processed
    Completed,
    /// The task stopped on an error; matches emitted before it stand
    Failed(String),
}

impl TaskOutcome {
    /// Whether the task processed the whole corpus
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed)
    }
}

/// Summary of one finished task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    /// Full place name
    pub place: String,
    /// Messages read
    pub messages: u64,
    /// Match events emitted
    pub matches: u64,
    /// Token similarity invocations
    pub comparisons: u64,
    /// How the task ended
    pub outcome: TaskOutcome,
}

/// Matches one place name against a freshly opened message source
pub struct QueryTask<'a> {
    query: PlaceQuery,
    config: EngineConfig,
    opener: &'a dyn SourceOpener,
    state: TaskState,
    source: Option<Box<dyn MessageSource>>,
    messages: u64,
    stats: AlignStats,
}

impl<'a> QueryTask<'a> {
    /// Create a task in the `Created` state
    pub fn new(query: PlaceQuery, config: EngineConfig, opener: &'a dyn SourceOpener) -> Self {
        Self {
            query,
            config,
            opener,
            state: TaskState::Created,
            source: None,
            messages: 0,
            stats: AlignStats::default(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// The place being searched for
    pub fn query(&self) -> &PlaceQuery {
        &self.query
    }

    /// Run the task to completion
    ///
    /// Errors never escape: they end up in the returned report's outcome
    /// and are logged. The report is also handed to `sink`.
    pub fn run(mut self, sink: &dyn MatchSink) -> TaskReport {
        self.execute(sink)
    }

    /// Drive the task through every state; it ends in `Closed`
    fn execute(&mut self, sink: &dyn MatchSink) -> TaskReport {
        let result = self.open().and_then(|()| self.stream(sink));
        self.drain();

        let outcome = match result {
            Ok(()) => TaskOutcome::Completed,
            Err(e) => {
                log::warn!("task '{}' failed: {e}", self.query.full_name());
                TaskOutcome::Failed(e.to_string())
            }
        };

        let report = TaskReport {
            place: self.query.full_name().to_string(),
            messages: self.messages,
            matches: self.stats.matches,
            comparisons: self.stats.comparisons,
            outcome,
        };
        sink.task_finished(&report);
        report
    }

    fn open(&mut self) -> Result<()> {
        self.state = TaskState::Opening;
        log::debug!(
            "task '{}': opening {}",
            self.query.full_name(),
            self.opener.describe()
        );
        self.source = Some(self.opener.open()?);
        Ok(())
    }

    fn stream(&mut self, sink: &dyn MatchSink) -> Result<()> {
        self.state = TaskState::Streaming;
        let Some(source) = self.source.as_mut() else {
            return Ok(());
        };

        let matching = self.config.matching;
        let aligner = TokenAligner::new(self.query.tokens(), matching.similarity(), matching.anchor);

        while source.has_next()? {
            let Some(raw) = source.next_line()? else {
                break;
            };
            let message = Message::parse(raw.number, &raw.text);
            self.messages += 1;

            for offset in aligner.align_with_stats(message.tokens(), &mut self.stats) {
                let event =
                    MatchEvent::new(&self.query, &message, offset, self.config.snippet_context);
                log::trace!(
                    "'{}' matched message {} at offset {offset}",
                    event.place,
                    event.message_id
                );
                sink.emit(event);
            }
        }

        Ok(())
    }

    fn drain(&mut self) {
        self.state = TaskState::Draining;
        if let Some(mut source) = self.source.take() {
            let origin = source.origin().to_string();
            if source.close() {
                log::debug!(
                    "task '{}': drained {} messages, closed {origin}",
                    self.query.full_name(),
                    self.messages
                );
            }
        }
        self.state = TaskState::Closed;
    }
}

impl Drop for QueryTask<'_> {
    fn drop(&mut self) {
        if let Some(mut source) = self.source.take() {
            if source.close() {
                log::debug!(
                    "task '{}' interrupted while {}; source closed",
                    self.query.full_name(),
                    self.state
                );
            }
        }
    }
}

impl fmt::Debug for QueryTask<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryTask")
            .field("place", &self.query.full_name())
            .field("state", &self.state)
            .field("messages", &self.messages)
            .finish()
    }
}
