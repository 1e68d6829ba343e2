use criterion::{criterion_group, criterion_main, Criterion};
use perfect_mazes::{
    cells::{Cell, CompassPrimary},
    generators::{self, FixedOrdering, StartCell},
    grid::MazeGrid,
    shuffle::shuffle,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::generate_maze(RowsCount(32), ColumnsCount(32), StartCell::Random, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_100(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(100);
    c.bench_function("recursive_backtracker_maze_100", move |b| {
        b.iter(|| generators::generate_maze(RowsCount(100), ColumnsCount(100), StartCell::Random, &mut rng))
    });
}

fn bench_carve_only_maze_100(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(100);
    c.bench_function("carve_only_maze_100", move |b| {
        b.iter(|| {
            let mut g = MazeGrid::new(RowsCount(100), ColumnsCount(100)).unwrap();
            generators::recursive_backtracker(&mut g,
                                              Cell::new(0, 0),
                                              &mut generators::RandomOrdering::new(&mut rng))
        })
    });
}

fn bench_fixed_ordering_maze_100(c: &mut Criterion) {
    c.bench_function("fixed_ordering_maze_100", |b| {
        let mut ordering = FixedOrdering::new(CompassPrimary::ALL);
        b.iter(|| {
            generators::generate_maze_with_ordering(RowsCount(100),
                                                    ColumnsCount(100),
                                                    Cell::new(0, 0),
                                                    &mut ordering)
        })
    });
}

fn bench_shuffle_1024(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1024);
    let mut items: Vec<u32> = (0..1024).collect();
    c.bench_function("shuffle_1024", move |b| {
        b.iter(|| shuffle(&mut items, &mut rng).len())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_100,
    bench_carve_only_maze_100,
    bench_fixed_ordering_maze_100,
    bench_shuffle_1024
);
criterion_main!(benches);
