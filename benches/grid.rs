use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_walls::{
    bounds,
    grid::Grid,
    units::{Height, Width},
    Maze,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_grid_11(c: &mut Criterion) {
    c.bench_function("grid_11", |b| {
        b.iter(|| Grid::new(Width(11), Height(11)).unwrap())
    });
}

fn bench_grid_128(c: &mut Criterion) {
    c.bench_function("grid_128", |b| {
        b.iter(|| Grid::new(Width(128), Height(128)).unwrap())
    });
}

fn bench_grid_500(c: &mut Criterion) {
    c.bench_function("grid_500", |b| {
        b.iter(|| Grid::new(Width(500), Height(500)).unwrap())
    });
}

fn bench_bounds_for_every_cell(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(64);
    let maze = Maze::generate(Width(64), Height(64), &mut rng).unwrap();
    c.bench_function("bounds_for_every_cell_64", move |b| {
        b.iter(|| {
            let g = maze.grid();
            g.iter()
                .map(|coord| bounds::bounds_for_cell(g, coord.x, coord.z).unwrap().len())
                .sum::<usize>()
        })
    });
}

fn bench_check_move(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(10);
    let maze = Maze::with_default_size(&mut rng).unwrap();
    c.bench_function("check_move", move |b| {
        b.iter(|| maze.check_move(black_box([4.05, 0.5, 7.5])))
    });
}

criterion_group!(
    benches,
    bench_grid_11,
    bench_grid_128,
    bench_grid_500,
    bench_bounds_for_every_cell,
    bench_check_move
);
criterion_main!(benches);
