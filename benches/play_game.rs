//! Engine benchmarks: move generation and full seeded games.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ludo_engine::core::{Color, ColorMap, DieRoll, GameState, Position};
use ludo_engine::play::{play_game, GreedyPolicy, RandomPolicy};
use ludo_engine::rules::movable_tokens;
use ludo_engine::PlayConfig;

fn midgame_state() -> GameState {
    let mut positions = ColorMap::with_value([Position::Yard; 4]);
    positions[Color::Red] = [Position::Ring(10), Position::Ring(45), Position::HomeStretch(2), Position::Yard];
    positions[Color::Green] = [Position::Ring(20), Position::Ring(3), Position::Yard, Position::Finished];
    positions[Color::Yellow] = [Position::Ring(30), Position::Yard, Position::Yard, Position::Yard];
    positions[Color::Blue] = [Position::Ring(50), Position::Ring(33), Position::HomeStretch(5), Position::Yard];
    GameState::from_positions(Color::Red, positions).expect("valid midgame board")
}

fn bench_movable_tokens(c: &mut Criterion) {
    let state = midgame_state();

    c.bench_function("movable_tokens_all_rolls", |b| {
        b.iter(|| {
            let mut total = 0;
            for value in 1..=6 {
                let roll = DieRoll::new(value).expect("die value in range");
                total += movable_tokens(black_box(&state), Color::Red, roll).len();
            }
            black_box(total)
        })
    });
}

fn bench_greedy_game(c: &mut Criterion) {
    let config = PlayConfig::new().with_history(false);

    c.bench_function("play_game_greedy", |b| {
        b.iter(|| black_box(play_game(&config, &mut GreedyPolicy).expect("game runs")))
    });
}

fn bench_random_game(c: &mut Criterion) {
    let config = PlayConfig::new().with_seed(7);

    c.bench_function("play_game_random_with_history", |b| {
        b.iter(|| black_box(play_game(&config, &mut RandomPolicy::new(7)).expect("game runs")))
    });
}

criterion_group!(benches, bench_movable_tokens, bench_greedy_game, bench_random_game);
criterion_main!(benches);
