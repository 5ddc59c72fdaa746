use criterion::{criterion_group, criterion_main, Criterion};
use maze_walls::{
    generators,
    grid::Grid,
    units::{Height, Width},
    Maze,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(32), Height(32)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng).unwrap();
            g
        })
    });
}

fn bench_recursive_backtracker_maze_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    c.bench_function("recursive_backtracker_maze_128", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(128), Height(128)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng).unwrap();
            g
        })
    });
}

fn bench_default_size_maze(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(10);
    c.bench_function("default_size_maze", move |b| {
        b.iter(|| Maze::with_default_size(&mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_128,
    bench_default_size_maze
);
criterion_main!(benches);
