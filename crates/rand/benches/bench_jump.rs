use std::hint::black_box;
use std::time::Instant;

use seedcraft_rand::{Lcg48, Xoroshiro128};

fn bench_sequential_steps(n: u64, iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let mut rng = Lcg48::new(i as u64);
        for _ in 0..n {
            black_box(rng.next(31));
        }
        black_box(rng.state());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  sequential ({n} steps, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_skip(n: u64, iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let mut rng = Lcg48::new(i as u64);
        rng.skip(black_box(n));
        black_box(rng.state());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  skip ({n} steps, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_xoroshiro_throughput(draws: usize, iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let mut rng = Xoroshiro128::new(i as u64);
        for _ in 0..draws {
            black_box(rng.next_u64());
        }
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  xoroshiro ({draws} draws, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Jump-Ahead Benchmarks ===\n");

    println!("Sequential stepping:");
    bench_sequential_steps(1000, 1000);
    bench_sequential_steps(1 << 20, 10);

    println!("\nAffine skip (O(log n)):");
    bench_skip(1000, 100000);
    bench_skip(1 << 20, 100000);
    bench_skip(u64::MAX, 100000);

    println!("\nDraw throughput:");
    bench_xoroshiro_throughput(10000, 100);

    println!("\n=== Done ===");
}
