use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use spgrid::{CsrGrid, MapGrid, SparseGrid};

const SIDE: usize = 64;

/// Fill roughly a third of a SIDE x SIDE square, row-major.
fn fill<G: SparseGrid<Value = i64>>(grid: &mut G) {
    for row in 0..SIDE {
        for col in 0..SIDE {
            if (row + col) % 3 == 0 {
                grid.set(row, col, (row * SIDE + col + 1) as i64);
            }
        }
    }
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_row_major");
    group.bench_function("csr", |b| {
        b.iter(|| {
            let mut grid = CsrGrid::new(0);
            fill(&mut grid);
            black_box(grid.len())
        })
    });
    group.bench_function("map", |b| {
        b.iter(|| {
            let mut grid = MapGrid::new(0);
            fill(&mut grid);
            black_box(grid.len())
        })
    });
    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let mut csr = CsrGrid::new(0);
    let mut map = MapGrid::new(0);
    fill(&mut csr);
    fill(&mut map);

    let mut group = c.benchmark_group("probe_full_square");
    group.bench_function("csr", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for row in 0..SIDE {
                for col in 0..SIDE {
                    sum += csr.get(black_box(row), black_box(col));
                }
            }
            black_box(sum)
        })
    });
    group.bench_function("map", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for row in 0..SIDE {
                for col in 0..SIDE {
                    sum += map.get(black_box(row), black_box(col));
                }
            }
            black_box(sum)
        })
    });
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut csr = CsrGrid::new(0);
    let mut map = MapGrid::new(0);
    fill(&mut csr);
    fill(&mut map);

    let mut group = c.benchmark_group("traverse_stored_cells");
    group.bench_function("csr", |b| {
        b.iter(|| black_box(csr.cells().map(|(_, _, v)| v).sum::<i64>()))
    });
    group.bench_function("map", |b| {
        b.iter(|| black_box(map.cells().map(|(_, _, v)| v).sum::<i64>()))
    });
    group.finish();
}

criterion_group!(benches, bench_fill, bench_probe, bench_traverse);
criterion_main!(benches);
