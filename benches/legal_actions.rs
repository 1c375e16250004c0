//! Criterion benchmarks for the hot paths of a playout.
//!
//! - `legal_actions` at the opening position, per player count
//! - a full first-action playout of a fresh session
//! - bincode snapshot round trip
//!
//! Run with: cargo bench --bench legal_actions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pandemic_rules::board::Color;
use pandemic_rules::rules::RulesEngine;
use pandemic_rules::session::{Session, SessionBuilder};

fn session(players: usize) -> Session {
    SessionBuilder::new()
        .player_count(players)
        .seed(42)
        .build()
        .expect("standard setup")
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_actions");

    for players in [2, 3, 4] {
        let session = session(players);
        group.bench_with_input(BenchmarkId::from_parameter(players), &session, |b, s| {
            b.iter(|| black_box(s.legal_actions()));
        });
    }

    group.finish();
}

fn bench_infect(c: &mut Criterion) {
    let base = SessionBuilder::new()
        .seed(42)
        .without_initial_infection()
        .build()
        .expect("standard setup");
    let khartoum = base.board().cities.require("Khartoum").expect("standard map");

    c.bench_function("chain_outbreak", |b| {
        b.iter_batched(
            || {
                let mut session = base.clone();
                session.infect(khartoum, 3, None).expect("clean board");
                session
            },
            |mut session| black_box(session.infect(khartoum, 1, Some(Color::Yellow))),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("playout_first_action", |b| {
        b.iter(|| {
            let mut session = session(4);
            while session.is_terminal().is_none() {
                let action = session.legal_actions()[0].clone();
                session.apply_action(&action).expect("offered action");
            }
            black_box(session.history().len())
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = session(4);

    c.bench_function("snapshot_roundtrip", |b| {
        b.iter(|| {
            let bytes = session.to_bytes().expect("encode");
            black_box(Session::from_bytes(&bytes).expect("decode"))
        });
    });
}

criterion_group!(benches, bench_legal_actions, bench_infect, bench_playout, bench_snapshot);
criterion_main!(benches);
