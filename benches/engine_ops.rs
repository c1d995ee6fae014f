use criterion::{criterion_group, criterion_main, Criterion};
use grid_2048::{Direction, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut boards = Vec::new();
    // Empty and two-tile starts
    boards.push(Grid::empty(4));
    let mut b = Grid::empty(4).with_random_cells(2, 2, &mut rng).unwrap();
    boards.push(b.clone());
    // Derive a variety of densities deterministically
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..20 {
        let dir = seq[i % seq.len()];
        let nb = b.shifted(dir);
        if nb != b {
            b = nb.with_random_cells(2, 1, &mut rng).unwrap();
        }
        boards.push(b.clone());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    for (name, dir) in [
        ("shift/left", Direction::Left),
        ("shift/up", Direction::Up),
        ("shift/right", Direction::Right),
        ("shift/down", Direction::Down),
    ] {
        c.bench_function(name, |bch| {
            let boards = corpus();
            bch.iter(|| {
                let mut changed = 0usize;
                for bd in &boards {
                    if bd.shifted(dir) != *bd {
                        changed += 1;
                    }
                }
                black_box(changed)
            })
        });
    }
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("queries/has_moves_left", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut live = 0usize;
            for bd in &boards {
                if bd.has_moves_left() {
                    live += 1;
                }
            }
            black_box(live)
        })
    });
    c.bench_function("queries/contains", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut wins = 0usize;
            for bd in &boards {
                if bd.contains(2048) {
                    wins += 1;
                }
            }
            black_box(wins)
        })
    });
}

fn bench_transforms(c: &mut Criterion) {
    c.bench_function("transform/rotate_cw", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut acc = 0u64;
            for bd in &boards {
                acc ^= bd.rotated_cw().rows()[0].iter().sum::<u64>();
            }
            black_box(acc)
        })
    });
    c.bench_function("transform/mirror", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut acc = 0u64;
            for bd in &boards {
                acc ^= bd.mirrored().rows()[0].iter().sum::<u64>();
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_shift, bench_queries, bench_transforms);
criterion_main!(benches);
