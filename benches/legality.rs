//! Benchmarks for legality probing
//!
//! Compares checking every id against a shared borrow of the state with
//! speculating every id on a clone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_monster::engine::display;
use poker_monster::{Agent, Engine, EngineConfig, GameState, RandomAgent};

/// A mid-game state: `steps` random actions into a seeded game.
fn mid_game(seed: u64, steps: usize) -> Engine {
    let mut engine = Engine::new(EngineConfig::default().with_seed(seed)).unwrap();
    let mut agent = RandomAgent::new(seed);
    for _ in 0..steps {
        if engine.results().is_some() {
            break;
        }
        let (_, menu) = engine.display_text();
        let legal = engine.legal_actions(&menu);
        let Some(id) = agent.choose(engine.state(), &menu, &legal) else {
            break;
        };
        engine.iterate(id).unwrap();
    }
    engine
}

fn bench_probing(c: &mut Criterion) {
    let mut group = c.benchmark_group("probing");

    for steps in [0, 20, 60] {
        let engine = mid_game(42, steps);
        let table = engine.table().clone();
        let state: GameState = engine.state().clone();

        group.bench_with_input(BenchmarkId::new("borrow", steps), &state, |b, state| {
            b.iter(|| black_box(state.all_legal_action_ids(&table)))
        });

        group.bench_with_input(BenchmarkId::new("clone", steps), &state, |b, state| {
            b.iter(|| {
                let legal: Vec<_> = table
                    .ids()
                    .filter(|&id| matches!(state.speculate(&table, id), Ok((legality, _)) if legality.is_legal()))
                    .collect();
                black_box(legal)
            })
        });

        group.bench_with_input(BenchmarkId::new("menu", steps), &state, |b, state| {
            b.iter(|| black_box(display::render_menu(state, &table)))
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = mid_game(7, 40);
    let state = engine.state().clone();

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
    c.bench_function("state_to_bytes", |b| b.iter(|| black_box(state.to_bytes().unwrap())));
}

criterion_group!(benches, bench_probing, bench_snapshot);
criterion_main!(benches);
