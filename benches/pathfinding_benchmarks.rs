use block_pusher::core::{advance_enemies, find_path, Cell, Grid, LevelState, Vec2};
use block_pusher::level_loader::parse_level;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const LEVELS: &[(&str, &str)] = &[
    ("corridor", r#"
3 12
# # # # # # # # # # # #
# G . . . . . . . . @ #
# # # # # # # # # # # #
"#),
    ("maze", r#"
9 11
# # # # # # # # # # #
# G . . . # . . . . #
# # # # . # . # # . #
# . . . . . . # . . #
# . # # # # . # . # #
# . # . . . . # . . #
# . # . # # # # # . #
# . . . # . . . . @ #
# # # # # # # # # # #
"#),
    ("crowd", r#"
6 10
G . . . . . . . . G
. # # . A . # # . .
. . . . # . . . . .
. A . G . . . A . .
. # # . . . # # . .
G . . . . @ . . . G
"#),
];

fn load(level: &str) -> LevelState {
    match parse_level(level) {
        Ok(level) => level,
        Err(err) => panic!("bad benchmark level: {}", err),
    }
}

fn open_grid(size: i32) -> Grid {
    Grid::new(size, size, Cell::Floor)
}

pub fn bench_find_path_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path_open_grid");

    for size in [8, 32, 128] {
        let grid = open_grid(size);
        let start = Vec2 { x: 0, y: 0 };
        let goal = Vec2 { x: size - 1, y: size - 1 };
        group.bench_with_input(BenchmarkId::new("corner_to_corner", size), &grid, |b, grid| {
            b.iter(|| find_path(black_box(grid), &[], start, goal, start));
        });
    }
    group.finish();
}

pub fn bench_enemy_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("enemy_tick");

    for &(name, level) in LEVELS {
        group.bench_with_input(BenchmarkId::new("advance_enemies", name), &level, |b, &level| {
            b.iter_with_setup(
                || load(level),
                |mut state| {
                    advance_enemies(black_box(&mut state));
                    black_box(state)
                },
            );
        });
    }
    group.finish();
}

criterion_group!(pathfinding_benches, bench_find_path_open_grid, bench_enemy_tick);

criterion_main!(pathfinding_benches);
