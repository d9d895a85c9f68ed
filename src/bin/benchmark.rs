//! Performance benchmark of the sparse life engine

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use infinite_life::{Cell, LiveSet, Region, step};

/// Average milliseconds per generation over `iterations` ticks
fn benchmark_step(mut live: LiveSet, iterations: u32) -> (f64, usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        live = step(&live);
    }
    (start.elapsed().as_secs_f64() * 1000.0 / iterations as f64, live.len())
}

fn soup(size: i64, density: f64) -> LiveSet {
    let mut rng = StdRng::seed_from_u64(42);
    let region = Region::new(Cell::new(0, 0), Cell::new(size - 1, size - 1));
    LiveSet::random_soup(region, density, &mut rng)
}

fn r_pentomino() -> LiveSet {
    [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]
        .into_iter()
        .map(Cell::from)
        .collect()
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>14} {:>12}",
        "Soup", "Start pop", "ms/gen", "cells/sec", "End pop");
    println!("{:-<68}", "");

    for size in sizes {
        let live = soup(size, 0.3);
        let start_pop = live.len();
        let (ms, end_pop) = benchmark_step(live, iterations);

        println!(
            "{:>12} {:>12} {:>12.2} {:>13.1}M {:>12}",
            format!("{}x{}", size, size),
            start_pop,
            ms,
            (start_pop as f64) / (ms / 1000.0) / 1_000_000.0,
            end_pop
        );
    }

    println!("\n=== R-pentomino, 1103 generations ===\n");

    let start = Instant::now();
    let (_, population) = benchmark_step(r_pentomino(), 1103);
    println!("Total: {:.1} ms, final population {}", start.elapsed().as_secs_f64() * 1000.0, population);
}
