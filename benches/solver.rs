//! Benchmarks for the eight-puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use eight_puzzle::solvability::is_solvable;
use eight_puzzle::{solve, Board, PuzzleInstance, Strategy};

/// Fixed set of random solvable boards, the same on every run.
fn random_instances(count: usize) -> Vec<PuzzleInstance> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| {
            let initial = Board::random_solvable(&Board::SOLVED, &mut rng);
            PuzzleInstance::new(initial, Board::SOLVED)
        })
        .collect()
}

/// Benchmark A* on random boards.
fn bench_solve_astar(c: &mut Criterion) {
    let instances = random_instances(8);

    c.bench_function("solve_astar", |b| {
        b.iter(|| {
            for instance in &instances {
                black_box(solve(black_box(instance), Strategy::AStar));
            }
        })
    });
}

/// Benchmark breadth-first search on random boards.
fn bench_solve_bfs(c: &mut Criterion) {
    let instances = random_instances(8);
    let mut group = c.benchmark_group("bfs");
    group.sample_size(10);
    group.bench_function("solve_random_8", |b| {
        b.iter(|| {
            for instance in &instances {
                black_box(solve(black_box(instance), Strategy::Bfs));
            }
        })
    });
    group.finish();
}

/// Benchmark depth-limited search on short scrambles.
fn bench_solve_depth_limited(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let instances: Vec<PuzzleInstance> = (0..8)
        .map(|_| PuzzleInstance::new(Board::SOLVED.scrambled(10, &mut rng), Board::SOLVED))
        .collect();
    let strategy = Strategy::DepthLimited { max_depth: 12 };

    c.bench_function("solve_depth_limited", |b| {
        b.iter(|| {
            for instance in &instances {
                black_box(solve(black_box(instance), strategy));
            }
        })
    });
}

/// Benchmark the parity check.
fn bench_is_solvable(c: &mut Criterion) {
    let instance = random_instances(1)[0];

    c.bench_function("is_solvable", |b| {
        b.iter(|| is_solvable(black_box(&instance.initial), black_box(&instance.goal)))
    });
}

criterion_group!(
    benches,
    bench_solve_astar,
    bench_solve_bfs,
    bench_solve_depth_limited,
    bench_is_solvable
);
criterion_main!(benches);
