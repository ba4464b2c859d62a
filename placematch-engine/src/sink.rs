//! Destinations for match events and task reports

use crate::task::TaskReport;
use placematch_core::MatchEvent;
use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// Receives match events as query tasks produce them
///
/// Called concurrently from every worker; implementations must not block
/// for long.
pub trait MatchSink: Send + Sync {
    /// Take ownership of one match event
    fn emit(&self, event: MatchEvent);

    /// Called once when a task reaches its closed state
    fn task_finished(&self, _report: &TaskReport) {}
}

/// Message carried by a channel-backed sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A matched window
    Match(MatchEvent),
    /// A task finished, successfully or not
    TaskFinished(TaskReport),
}

impl MatchSink for Sender<SinkEvent> {
    fn emit(&self, event: MatchEvent) {
        if self.send(SinkEvent::Match(event)).is_err() {
            log::trace!("match dropped: receiver disconnected");
        }
    }

    fn task_finished(&self, report: &TaskReport) {
        if self.send(SinkEvent::TaskFinished(report.clone())).is_err() {
            log::trace!("task report dropped: receiver disconnected");
        }
    }
}

/// Collects everything in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<MatchEvent>>,
    reports: Mutex<Vec<TaskReport>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events collected so far
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Snapshot of the task reports collected so far
    pub fn reports(&self) -> Vec<TaskReport> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Consume the sink, returning its events
    pub fn into_events(self) -> Vec<MatchEvent> {
        self.events
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MatchSink for CollectingSink {
    fn emit(&self, event: MatchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }

    fn task_finished(&self, report: &TaskReport) {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(report.clone());
    }
}
