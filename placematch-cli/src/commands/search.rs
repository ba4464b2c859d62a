//! Search command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{load_places, parse_places};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use placematch_core::{AnchorPolicy, PlaceQuery, StrategyKind};
use placematch_engine::{Corpus, Encoding, RunSummary, SinkEvent, TaskCoordinator, TaskOutcome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Message corpus, one `<id>\t<text>` record per line
    #[arg(short, long, value_name = "FILE")]
    pub messages: PathBuf,

    /// Place list, one full place name per line
    #[arg(short, long, value_name = "FILE")]
    pub places: Option<PathBuf>,

    /// Place name to search for (repeatable)
    #[arg(short = 'P', long = "place", value_name = "NAME")]
    pub place: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token similarity strategy
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<StrategyKind>,

    /// Check order for window pruning
    #[arg(short, long, value_name = "POLICY")]
    pub anchor: Option<AnchorPolicy>,

    /// Minimum edit-distance similarity
    #[arg(long, value_name = "VALUE")]
    pub threshold: Option<f64>,

    /// N-gram size
    #[arg(long, value_name = "N")]
    pub ngram_size: Option<usize>,

    /// Minimum n-gram coefficient
    #[arg(long, value_name = "VALUE")]
    pub ngram_threshold: Option<f64>,

    /// Words of context around each match
    #[arg(long, value_name = "WORDS")]
    pub context: Option<usize>,

    /// Number of worker threads (0 = auto)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Map the corpus into memory once and share it across tasks
    #[arg(long)]
    pub mmap: bool,

    /// Declared corpus encoding
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Run one place at a time on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting place search");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let queries = self.load_queries()?;
        let engine_config = config.engine_config();

        let corpus = if config.performance.mmap {
            Corpus::mapped(&self.messages, engine_config.encoding).with_context(|| {
                format!("Failed to map message corpus: {}", self.messages.display())
            })?
        } else {
            Corpus::file(&self.messages, engine_config.encoding)
        };

        let coordinator = TaskCoordinator::new(engine_config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = create_formatter(config.output.format, writer, config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_tasks(queries.len() as u64);

        let summary = run_search(
            coordinator,
            queries,
            corpus,
            self.sequential,
            formatter.as_mut(),
            &progress,
        )?;

        formatter.finish()?;
        progress.finish();

        if !self.quiet {
            print_summary(&summary);
        }

        Ok(())
    }

    /// Merge the config file with command-line overrides
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.matching.strategy = strategy;
        }
        if let Some(anchor) = self.anchor {
            config.matching.anchor = anchor;
        }
        if let Some(threshold) = self.threshold {
            config.matching.edit_distance_threshold = threshold;
        }
        if let Some(size) = self.ngram_size {
            config.matching.ngram_size = size;
        }
        if let Some(threshold) = self.ngram_threshold {
            config.matching.ngram_threshold = threshold;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(context) = self.context {
            config.output.snippet_context = context;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = threads;
        }
        if self.mmap {
            config.performance.mmap = true;
        }
        if let Some(encoding) = self.encoding {
            config.performance.encoding = encoding;
        }

        config.validate()?;
        Ok(config)
    }

    /// Places from the list file followed by those given inline
    pub fn load_queries(&self) -> Result<Vec<PlaceQuery>> {
        let mut queries = match &self.places {
            Some(path) => load_places(path)?,
            None => Vec::new(),
        };
        queries.extend(parse_places(&self.place.join("\n")));

        if queries.is_empty() {
            return Err(CliError::NoPlaces.into());
        }
        log::info!("Loaded {} place names", queries.len());
        Ok(queries)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Run the coordinator on its own thread and drain its events here
fn run_search(
    coordinator: TaskCoordinator,
    queries: Vec<PlaceQuery>,
    corpus: Corpus,
    sequential: bool,
    formatter: &mut dyn OutputFormatter,
    progress: &ProgressReporter,
) -> Result<RunSummary> {
    let (tx, rx) = mpsc::channel::<SinkEvent>();

    let worker = thread::Builder::new()
        .name("placematch-coordinator".to_string())
        .spawn(move || {
            if sequential {
                coordinator.run_sequential(queries, &corpus, &tx)
            } else {
                coordinator.run(queries, &corpus, &tx)
            }
        })
        .context("Failed to start coordinator thread")?;

    for event in rx {
        match event {
            SinkEvent::Match(found) => formatter.format_match(&found)?,
            SinkEvent::TaskFinished(report) => progress.task_completed(&report),
        }
    }

    worker.join().map_err(|_| CliError::WorkerPanic.into())
}

fn print_summary(summary: &RunSummary) {
    eprintln!(
        "Searched {} places: {} matches, {} failed",
        summary.tasks, summary.matches, summary.failed
    );
    for report in &summary.reports {
        if let TaskOutcome::Failed(reason) = &report.outcome {
            eprintln!("  {}: {reason}", report.place);
        }
    }
}
