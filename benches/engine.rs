use boundlife::{Board, Pos2, SimulationState, advance};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn make_board(width: usize, height: usize) -> Board {
    let alive = (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Pos2::new(x, y)))
        .filter(|pos| (pos.x + pos.y) % 3 == 0);
    Board::from_alive(width, height, alive).unwrap().0
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [64, 128, 256] {
        let board = make_board(size, size);

        group.bench_with_input(BenchmarkId::new("fresh", size), &board, |b, board| {
            b.iter(|| advance(board));
        });

        group.bench_with_input(BenchmarkId::new("double_buffered", size), &board, |b, board| {
            b.iter_batched(
                || {
                    let mut state = SimulationState::new(board.clone());
                    state.toggle();
                    state
                },
                |mut state| state.tick(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
