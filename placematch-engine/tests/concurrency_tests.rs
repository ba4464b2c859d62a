//! Concurrent runs must agree with sequential runs

use placematch_core::StrategyKind;
use placematch_engine::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

const PLACES: &[&str] = &[
    "New York",
    "San Francisco",
    "Paris",
    "Rio de Janeiro",
    "Sydney",
    "Los Angeles",
];

const FILLER: &[&str] = &[
    "just", "landed", "in", "the", "rain", "again", "love", "this", "city", "see", "you",
    "soon",
];

const MENTIONS: &[&str] = &[
    "New York",
    "new yorkk",
    "San Fransisco",
    "paris!",
    "Rio de Janiero",
    "Sidney",
    "Los Angeles,",
    "york new",
];

/// Deterministic corpus mixing filler words with place mentions
fn corpus_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        let mut words: Vec<&str> = (0..(i % 7) + 2).map(|j| FILLER[(i * 5 + j) % FILLER.len()]).collect();
        if i % 3 != 0 {
            let at = i % words.len();
            words.insert(at, MENTIONS[i % MENTIONS.len()]);
        }
        text.push_str(&format!("{}\t{}\n", 1000 + i, words.join(" ")));
    }
    text
}

fn queries() -> Vec<PlaceQuery> {
    PLACES.iter().map(|p| PlaceQuery::new(*p).unwrap()).collect()
}

/// Events per place, ordered by line and offset
fn by_place(events: Vec<MatchEvent>) -> BTreeMap<String, Vec<(u64, usize, String)>> {
    let mut grouped: BTreeMap<String, Vec<(u64, usize, String)>> = BTreeMap::new();
    for event in events {
        grouped
            .entry(event.place)
            .or_default()
            .push((event.line, event.offset, event.snippet));
    }
    for matches in grouped.values_mut() {
        matches.sort();
    }
    grouped
}

fn run_both(config: EngineConfig, opener: &dyn SourceOpener) -> (RunSummary, RunSummary) {
    let coordinator = TaskCoordinator::new(config).unwrap();

    let concurrent_sink = CollectingSink::new();
    let concurrent = coordinator.run(queries(), opener, &concurrent_sink);

    let sequential_sink = CollectingSink::new();
    let sequential = coordinator.run_sequential(queries(), opener, &sequential_sink);

    assert_eq!(
        by_place(concurrent_sink.into_events()),
        by_place(sequential_sink.into_events())
    );
    (concurrent, sequential)
}

#[test]
fn test_concurrent_matches_sequential_per_strategy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("messages.txt");
    fs::write(&path, corpus_text(300)).unwrap();
    let corpus = Corpus::file(&path, Encoding::Ascii);

    for strategy in StrategyKind::ALL {
        let config = EngineConfig {
            threads: Some(4),
            matching: MatchConfig {
                strategy,
                ..MatchConfig::default()
            },
            ..EngineConfig::default()
        };

        let (concurrent, sequential) = run_both(config, &corpus);
        assert_eq!(concurrent, sequential, "strategy {strategy}");
        assert!(concurrent.all_succeeded());
        assert_eq!(concurrent.messages, 300 * PLACES.len() as u64);
        assert!(concurrent.matches > 0, "strategy {strategy} found nothing");
    }
}

#[test]
fn test_file_and_mapped_sources_agree() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("messages.txt");
    fs::write(&path, corpus_text(120)).unwrap();

    let config = EngineConfig {
        threads: Some(3),
        ..EngineConfig::default()
    };
    let coordinator = TaskCoordinator::new(config).unwrap();

    let file_sink = CollectingSink::new();
    let file_summary = coordinator.run(queries(), &Corpus::file(&path, Encoding::Ascii), &file_sink);

    let mapped_sink = CollectingSink::new();
    let mapped = Corpus::mapped(&path, Encoding::Ascii).unwrap();
    let mapped_summary = coordinator.run(queries(), &mapped, &mapped_sink);

    assert_eq!(file_summary, mapped_summary);
    assert_eq!(
        by_place(file_sink.into_events()),
        by_place(mapped_sink.into_events())
    );
}

#[test]
fn test_reversed_mention_never_matches() {
    let region = MappedRegion::from_bytes("mem", "1\tgreetings from york new\n2\tNew York rocks\n");
    let corpus = Corpus::from_region(region, Encoding::Ascii);
    let coordinator = TaskCoordinator::new(EngineConfig::default()).unwrap();
    let sink = CollectingSink::new();

    let summary = coordinator.run(vec![PlaceQuery::new("New York").unwrap()], &corpus, &sink);

    assert_eq!(summary.matches, 1);
    let events = sink.into_events();
    assert_eq!(events[0].message_id, "2");
    assert_eq!(events[0].offset, 0);
    assert_eq!(events[0].snippet, "New York rocks");
}

#[test]
fn test_decode_failure_only_fails_its_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, b"1\tParis\n2\tZ\xfcrich\n3\tParis again\n").unwrap();

    let coordinator = TaskCoordinator::new(EngineConfig::default()).unwrap();
    let sink = CollectingSink::new();
    let summary = coordinator.run(
        queries(),
        &Corpus::file(&path, Encoding::Ascii),
        &sink,
    );

    assert_eq!(summary.failed, PLACES.len());
    let paris = summary.reports.iter().find(|r| r.place == "Paris").unwrap();
    assert_eq!(paris.matches, 1);
    assert_eq!(paris.messages, 1);

    let utf8 = TaskCoordinator::new(EngineConfig {
        encoding: Encoding::Utf8,
        ..EngineConfig::default()
    })
    .unwrap();
    assert!(Corpus::mapped(&path, utf8.config().encoding)
        .and_then(|c| c.open().map(|_| ()))
        .is_err());
}
