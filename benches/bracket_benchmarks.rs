use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ringside::tournament::{Tournament, build_bracket, decide_match, seed_first_round};

/// Helper to create a seeded tournament with N entrants
fn setup_tournament(n: u32) -> Tournament {
    let mut matches = build_bracket(n).unwrap();
    let ids: Vec<String> = (0..n).map(|i| format!("competitor-{i}")).collect();
    seed_first_round(&mut matches, &ids, &mut StdRng::seed_from_u64(0)).unwrap();

    Tournament {
        id: "bench".to_string(),
        name: "Benchmark Invitational".to_string(),
        date: chrono::Utc::now(),
        participant_count: n,
        matches,
        title_id: None,
        completed: false,
        winner: None,
    }
}

/// Play a tournament to completion, always advancing slot A
fn play_through(mut tournament: Tournament) -> Tournament {
    for round in 1..=tournament.rounds() {
        let ids: Vec<_> = tournament.matches_in_round(round).map(|m| m.id).collect();
        for id in ids {
            let winner = tournament
                .find_match(id)
                .unwrap()
                .slot_a
                .clone()
                .unwrap();
            decide_match(&mut tournament, id, &winner).unwrap();
        }
    }
    tournament
}

/// Benchmark bracket construction across field sizes
fn bench_build_bracket(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_bracket");
    for n in [8u32, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| build_bracket(n).unwrap());
        });
    }
    group.finish();
}

/// Benchmark seeding a 64-entrant field
fn bench_seed_first_round(c: &mut Criterion) {
    let matches = build_bracket(64).unwrap();
    let ids: Vec<String> = (0..64).map(|i| format!("competitor-{i}")).collect();

    c.bench_function("seed_first_round_64", |b| {
        b.iter(|| {
            let mut fresh = matches.clone();
            seed_first_round(&mut fresh, &ids, &mut StdRng::seed_from_u64(0)).unwrap();
            fresh
        });
    });
}

/// Benchmark a full 32-entrant playthrough
fn bench_full_playthrough(c: &mut Criterion) {
    c.bench_function("play_through_32", |b| {
        b.iter(|| play_through(setup_tournament(32)));
    });
}

criterion_group!(
    benches,
    bench_build_bracket,
    bench_seed_first_round,
    bench_full_playthrough
);
criterion_main!(benches);
