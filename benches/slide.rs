use chroma_2048::engine::slide;
use chroma_2048::{Board, BoardEngine, Direction, Tile};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

/// Boards at a spread of densities, taken from a seeded game.
fn corpus() -> Vec<Board> {
    let mut engine = BoardEngine::seeded(42);
    let mut boards = vec![Board::empty(engine.config().board_size), engine.snapshot()];
    for i in 0..40 {
        let dir = Direction::ALL[i % Direction::ALL.len()];
        boards.push(engine.apply(dir).board);
    }
    boards
}

fn bench_slide(c: &mut Criterion) {
    let boards = corpus();
    for dir in Direction::ALL {
        c.bench_function(&format!("slide/{dir}"), |b| {
            b.iter(|| {
                let mut merges = 0usize;
                for board in &boards {
                    merges += slide(black_box(board), dir, Tile::EMPTY).merges;
                }
                black_box(merges)
            })
        });
    }
}

fn bench_apply(c: &mut Criterion) {
    c.bench_function("engine/apply", |b| {
        b.iter_batched(
            || BoardEngine::seeded(7),
            |mut engine| {
                for i in 0..64 {
                    let outcome = engine.apply(Direction::ALL[i % 4]);
                    black_box(outcome.score_delta);
                }
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = BoardEngine::seeded(9);
    c.bench_function("engine/snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_slide, bench_apply, bench_snapshot);
criterion_main!(benches);
