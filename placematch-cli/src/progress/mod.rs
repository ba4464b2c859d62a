//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use placematch_engine::TaskReport;
use std::time::Duration;

/// Progress reporter over finished query tasks
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_tasks` place names
    pub fn init_tasks(&mut self, total_tasks: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_tasks);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} places {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("progress template rejected: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a finished task
    pub fn task_completed(&self, report: &TaskReport) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{} ({} matches)", report.place, report.matches));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placematch_engine::TaskOutcome;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_tasks(5);
        assert!(!reporter.is_active());

        let report = TaskReport {
            place: "Oslo".into(),
            messages: 1,
            matches: 0,
            comparisons: 1,
            outcome: TaskOutcome::Completed,
        };
        reporter.task_completed(&report);
        reporter.finish();
    }

    #[test]
    fn test_bar_created_when_not_quiet() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_tasks(2);
        assert!(reporter.is_active());
        reporter.finish();
    }
}
