//! Benchmarks for word tracing and full puzzle searches.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use wordfall_core::{Dictionary, Grid};
use wordfall_solver::{Solver, WordFinder};

const WORDS: &[&str] = &[
    "eel", "eels", "hymn", "lest", "molest", "mole", "moles", "more", "nose", "note", "ore",
    "our", "pro", "prom", "rose", "rot", "rote", "son", "sole", "tee", "teen", "ten", "toe",
    "tore", "your",
];

const PUZZLES: &[(&str, &str, &[usize])] = &[
    ("4x4", "NHYN/PRMO/ROSL/UTEE", &[6, 4]),
    ("4x4_three_words", "NHYN/PRMO/ROSL/UTEE", &[3, 3, 4]),
    ("5x5", "TENOR/EELSO/ROTEM/SNOPR/ULEYO", &[4, 4, 3]),
];

fn dictionary() -> Dictionary {
    WORDS.iter().collect()
}

fn bench_find_words(c: &mut Criterion) {
    let dictionary = dictionary();
    let finder = WordFinder::new(&dictionary);

    for &(param, grid, _) in PUZZLES {
        let grid: Grid = grid.parse().unwrap();
        for len in [3, 4, 6] {
            c.bench_with_input(
                BenchmarkId::new(format!("find_words_{len}"), param),
                &grid,
                |b, grid| {
                    b.iter(|| hint::black_box(finder.find_words(hint::black_box(grid), len)));
                },
            );
        }
    }
}

fn bench_solve(c: &mut Criterion) {
    let dictionary = dictionary();

    for &(param, grid, lengths) in PUZZLES {
        let solver = Solver::new(&dictionary, grid.parse().unwrap(), lengths.to_vec());
        c.bench_with_input(BenchmarkId::new("solve", param), &solver, |b, solver| {
            b.iter(|| hint::black_box(solver.solve()));
        });
        c.bench_with_input(
            BenchmarkId::new("solve_parallel", param),
            &solver,
            |b, solver| {
                b.iter(|| hint::black_box(solver.solve_parallel()));
            },
        );
    }
}

criterion_group!(benches, bench_find_words, bench_solve);
criterion_main!(benches);
