//! Benchmarks for window alignment under each strategy and anchor policy

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use placematch_core::{AnchorPolicy, MatchConfig, Message, PlaceQuery, StrategyKind, TokenAligner};
use std::hint::black_box;

/// Generate a batch of messages, one in `every` mentioning the place
fn generate_messages(count: usize, every: usize) -> Vec<Message> {
    let filler = "heading out early tomorrow morning with friends for coffee and a long walk";
    let mention = "heading out to new yrok city tomorrow morning for coffee and a long walk";

    (0..count)
        .map(|i| {
            let text = if i % every == 0 { mention } else { filler };
            Message::from_text(i.to_string(), i as u64 + 1, text)
        })
        .collect()
}

fn benchmark_anchor_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor_policies");

    let messages = generate_messages(1_000, 20);
    let place = PlaceQuery::new("New York City").unwrap();
    group.throughput(Throughput::Elements(messages.len() as u64));

    for policy in AnchorPolicy::ALL {
        let config = MatchConfig::builder().anchor(policy).build().unwrap();
        let aligner = TokenAligner::new(place.tokens(), config.similarity(), config.anchor);

        group.bench_with_input(BenchmarkId::from_parameter(policy), &messages, |b, msgs| {
            b.iter(|| {
                msgs.iter()
                    .map(|m| aligner.align(black_box(m.tokens())).len())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    let messages = generate_messages(1_000, 20);
    let place = PlaceQuery::new("New York City").unwrap();
    group.throughput(Throughput::Elements(messages.len() as u64));

    for strategy in StrategyKind::ALL {
        let config = MatchConfig::builder().strategy(strategy).build().unwrap();
        let aligner = TokenAligner::new(place.tokens(), config.similarity(), config.anchor);

        group.bench_with_input(BenchmarkId::from_parameter(strategy), &messages, |b, msgs| {
            b.iter(|| {
                msgs.iter()
                    .map(|m| aligner.align(black_box(m.tokens())).len())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_anchor_policies, benchmark_strategies);
criterion_main!(benches);
