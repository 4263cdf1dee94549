use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duel_of_life::{Cell, EvolutionEngine, GameRng, GameSession, Grid, SessionConfig, GRID_SIZE};

// ============================================================================
// Generation step
// ============================================================================

fn checkerboard_rows() -> Grid {
    let mut grid = Grid::new();
    for row in (0..GRID_SIZE).step_by(2) {
        for col in 0..GRID_SIZE {
            let cell = if (row + col) % 4 == 0 { Cell::Player1 } else { Cell::Player2 };
            // In-range coordinates never fail.
            let _ = grid.set(row, col, cell);
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let grid = checkerboard_rows();
    let mut rng = GameRng::new(42);

    c.bench_function("evolution_step", |b| {
        b.iter(|| black_box(EvolutionEngine::step(black_box(&grid), &mut rng)))
    });
}

fn bench_run_100(c: &mut Criterion) {
    let grid = checkerboard_rows();

    c.bench_function("evolution_run_100", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(42);
            black_box(EvolutionEngine::run(&grid, &mut rng, 100))
        })
    });
}

// ============================================================================
// Session
// ============================================================================

fn bench_session_tick(c: &mut Criterion) {
    let config = SessionConfig::default().with_seed(7);
    let start = GameSession::from_position(checkerboard_rows(), config);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            let mut session = start.clone();
            black_box(session.tick())
        })
    });
}

criterion_group!(benches, bench_step, bench_run_100, bench_session_tick);

criterion_main!(benches);
