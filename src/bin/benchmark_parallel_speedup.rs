//! Run a generated problem set once sequentially and once in parallel, then print timings.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup [count] [max_side]

use std::time::Instant;

use prize_path::data::{generate_problem_set, GenerateOptions};
use prize_path::harness::{run_problem_set, RunOptions};
use prize_path::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args: Vec<String> = std::env::args().collect();
    let count = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(400);
    let max_side = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(128);

    let set = generate_problem_set(&GenerateOptions {
        count,
        min_side: (max_side / 4).max(1),
        max_side,
        max_prize: 1000,
        seed: 12345,
    });
    let cells: usize = set.data.iter().map(|e| e.prizes.len()).sum();
    println!("Problem set: {} grids, {} cells total", set.data.len(), cells);
    println!();

    let t0 = Instant::now();
    let seq = run_problem_set(
        &set,
        &RunOptions {
            sequential: true,
            ..RunOptions::default()
        },
    )?;
    let seq_ms = t0.elapsed().as_secs_f64() * 1000.0;
    println!("Sequential:  {seq_ms:.2} ms");

    let t0 = Instant::now();
    let par = run_problem_set(&set, &RunOptions::default())?;
    let par_ms = t0.elapsed().as_secs_f64() * 1000.0;
    println!("Parallel:    {par_ms:.2} ms");

    println!();
    println!("Speedup:     {:.2}x", seq_ms / par_ms.max(f64::EPSILON));

    if seq.results != par.results {
        return Err("sequential and parallel results differ".into());
    }
    if !seq.all_correct() {
        return Err("generated answers did not verify".into());
    }
    println!("(Results match sequential vs parallel)");
    Ok(())
}
