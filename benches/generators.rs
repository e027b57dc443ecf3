use criterion::{criterion_group, criterion_main, Criterion};
use noise_mazes::{
    carving,
    config::MazeConfig,
    connectivity,
    generators::{self, MazeGenerator},
    noise_field::NoiseField,
    units::{GridSize, NoiseScale, Octaves},
};

fn bench_build_maze_32(c: &mut Criterion) {
    c.bench_function("build_maze_32", move |b| {
        b.iter(|| generators::build(32, 7))
    });
}

fn bench_build_maze_100(c: &mut Criterion) {
    c.bench_function("build_maze_100", move |b| {
        b.iter(|| generators::build(100, 7))
    });
}

fn bench_corner_exit_maze_100(c: &mut Criterion) {
    let generator = MazeGenerator::new(MazeConfig::new(100, 7)
        .with_exit_placement(noise_mazes::exits::ExitPlacement::FarCorner));
    c.bench_function("corner_exit_maze_100", move |b| {
        b.iter(|| generator.generate())
    });
}

fn bench_noise_table_100(c: &mut Criterion) {
    let field = NoiseField::new(7, Octaves(3));
    c.bench_function("noise_table_100", move |b| {
        b.iter(|| field.sample_table(GridSize(100), NoiseScale(20.0)))
    });
}

fn bench_reachability_100(c: &mut Criterion) {
    let maze = generators::build(100, 7).unwrap();
    c.bench_function("reachability_100", move |b| {
        b.iter(|| connectivity::reachable_cells(&maze, maze.origin()))
    });
}

fn bench_carve_100(c: &mut Criterion) {
    let noise = NoiseField::new(7, Octaves(3)).sample_table(GridSize(100), NoiseScale(20.0));
    let mut config = MazeConfig::new(100, 7);
    config.threshold = 10.0; // nothing carved, leaves an all-walled grid to carve into
    let walled = MazeGenerator::new(config).generate().unwrap();
    c.bench_function("carve_100", move |b| {
        b.iter(|| {
            let mut grid = walled.clone();
            carving::carve(&mut grid, &noise, -0.1)
        })
    });
}

criterion_group!(
    benches,
    bench_build_maze_32,
    bench_build_maze_100,
    bench_corner_exit_maze_100,
    bench_noise_table_100,
    bench_reachability_100,
    bench_carve_100
);
criterion_main!(benches);
