//! Runs one query task per place name on a worker pool

use crate::config::EngineConfig;
use crate::error::Result;
use crate::sink::MatchSink;
use crate::source::SourceOpener;
use crate::task::{QueryTask, TaskReport};
use placematch_core::PlaceQuery;
use serde::{Deserialize, Serialize};

/// Totals over every task of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-task reports, in query order
    pub reports: Vec<TaskReport>,
    /// Tasks run
    pub tasks: usize,
    /// Tasks that processed the whole corpus
    pub succeeded: usize,
    /// Tasks that stopped on an error
    pub failed: usize,
    /// Match events emitted across all tasks
    pub matches: u64,
    /// Messages read across all tasks
    pub messages: u64,
}

impl RunSummary {
    /// Aggregate task reports
    pub fn from_reports(reports: Vec<TaskReport>) -> Self {
        let succeeded = reports.iter().filter(|r| r.outcome.is_completed()).count();
        Self {
            tasks: reports.len(),
            succeeded,
            failed: reports.len() - succeeded,
            matches: reports.iter().map(|r| r.matches).sum(),
            messages: reports.iter().map(|r| r.messages).sum(),
            reports,
        }
    }

    /// Whether every task completed
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Schedules query tasks and collects their reports
///
/// Tasks share nothing but the immutable [`EngineConfig`], the opener and
/// the sink. A failing task never affects its siblings.
pub struct TaskCoordinator {
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    pool: rayon::ThreadPool,
}

impl TaskCoordinator {
    /// Validate `config` and start the worker pool
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.thread_count())
                .thread_name(|i| format!("placematch-worker-{i}"))
                .build()
                .map_err(|e| crate::error::EngineError::ThreadPool(e.to_string()))?;
            log::debug!("worker pool started with {} threads", pool.current_num_threads());
            Ok(Self { config, pool })
        }

        #[cfg(not(feature = "parallel"))]
        {
            Ok(Self { config })
        }
    }

    /// Configuration handed to every task
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Worker threads available
    pub fn threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.pool.current_num_threads()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Run one task per query concurrently
    ///
    /// Events reach `sink` as tasks produce them, interleaved across tasks;
    /// each task's own events stay in corpus order. Reports come back in
    /// query order.
    #[cfg(feature = "parallel")]
    pub fn run(
        &self,
        queries: Vec<PlaceQuery>,
        opener: &dyn SourceOpener,
        sink: &dyn MatchSink,
    ) -> RunSummary {
        use rayon::prelude::*;

        let config = self.config;
        log::info!(
            "running {} queries against {} on {} threads",
            queries.len(),
            opener.describe(),
            self.threads()
        );

        let reports = self.pool.install(|| {
            queries
                .into_par_iter()
                .map(|query| QueryTask::new(query, config, opener).run(sink))
                .collect::<Vec<_>>()
        });

        summarize(reports)
    }

    /// Run one task per query concurrently
    #[cfg(not(feature = "parallel"))]
    pub fn run(
        &self,
        queries: Vec<PlaceQuery>,
        opener: &dyn SourceOpener,
        sink: &dyn MatchSink,
    ) -> RunSummary {
        self.run_sequential(queries, opener, sink)
    }

    /// Run the tasks one after another on the calling thread
    pub fn run_sequential(
        &self,
        queries: Vec<PlaceQuery>,
        opener: &dyn SourceOpener,
        sink: &dyn MatchSink,
    ) -> RunSummary {
        log::info!(
            "running {} queries against {} sequentially",
            queries.len(),
            opener.describe()
        );

        let reports = queries
            .into_iter()
            .map(|query| QueryTask::new(query, self.config, opener).run(sink))
            .collect();

        summarize(reports)
    }
}

fn summarize(reports: Vec<TaskReport>) -> RunSummary {
    let summary = RunSummary::from_reports(reports);
    log::info!(
        "{} tasks finished: {} succeeded, {} failed, {} matches in {} messages",
        summary.tasks,
        summary.succeeded,
        summary.failed,
        summary.matches,
        summary.messages
    );
    summary
}

impl std::fmt::Debug for TaskCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskCoordinator")
            .field("config", &self.config)
            .field("threads", &self.threads())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::error::EngineError;
    use crate::sink::CollectingSink;
    use crate::source::{Corpus, MappedRegion};
    use crate::task::TaskOutcome;

    const CORPUS: &str = "1\tLanded in New York this morning\n\
                          2\tparis in the spring\n\
                          3\tfrom Paris to New Yrok\n";

    fn corpus() -> Corpus {
        Corpus::from_region(MappedRegion::from_bytes("mem", CORPUS), Encoding::Ascii)
    }

    fn queries(names: &[&str]) -> Vec<PlaceQuery> {
        names.iter().map(|n| PlaceQuery::new(*n).unwrap()).collect()
    }

    fn two_threads() -> EngineConfig {
        EngineConfig {
            threads: Some(2),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig {
            threads: Some(0),
            ..EngineConfig::default()
        };
        assert!(matches!(
            TaskCoordinator::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_collects_reports_in_query_order() {
        let coordinator = TaskCoordinator::new(two_threads()).unwrap();
        let sink = CollectingSink::new();

        let summary = coordinator.run(queries(&["Paris", "New York", "Tokyo"]), &corpus(), &sink);

        assert_eq!(summary.tasks, 3);
        assert!(summary.all_succeeded());
        let places: Vec<&str> = summary.reports.iter().map(|r| r.place.as_str()).collect();
        assert_eq!(places, ["Paris", "New York", "Tokyo"]);
        assert_eq!(summary.reports[0].matches, 2);
        assert_eq!(summary.reports[1].matches, 1);
        assert_eq!(summary.reports[2].matches, 0);
        assert_eq!(summary.matches, 3);
        assert_eq!(summary.messages, 9);
        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.reports().len(), 3);
    }

    #[test]
    fn test_failure_stays_with_its_task() {
        let coordinator = TaskCoordinator::new(two_threads()).unwrap();
        let sink = CollectingSink::new();
        let missing = Corpus::file("/nonexistent/corpus.txt", Encoding::Ascii);

        let summary = coordinator.run(queries(&["Paris", "Lima"]), &missing, &sink);

        assert_eq!(summary.failed, 2);
        assert_eq!(summary.succeeded, 0);
        assert!(summary
            .reports
            .iter()
            .all(|r| matches!(r.outcome, TaskOutcome::Failed(_))));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_empty_query_list() {
        let coordinator = TaskCoordinator::new(two_threads()).unwrap();
        let summary = coordinator.run(Vec::new(), &corpus(), &CollectingSink::new());
        assert_eq!(summary, RunSummary::default());
        assert!(summary.all_succeeded());
    }

    #[test]
    fn test_from_reports_counts() {
        let report = |place: &str, matches, outcome| TaskReport {
            place: place.into(),
            messages: 10,
            matches,
            comparisons: 12,
            outcome,
        };
        let summary = RunSummary::from_reports(vec![
            report("A", 2, TaskOutcome::Completed),
            report("B", 0, TaskOutcome::Failed("gone".into())),
        ]);
        assert_eq!(summary.tasks, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.messages, 20);
        assert!(!summary.all_succeeded());
    }
}
