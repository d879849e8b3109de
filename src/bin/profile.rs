use std::time::Instant;

use mazegen::generators::{WallPolicy, generate_maze};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let n = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(30);
    let iterations = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&iters| iters > 0)
        .unwrap_or(100);

    let mut total_passages = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        match generate_maze(n, WallPolicy::Independent, None) {
            Ok(grid) => total_passages += grid.passages(),
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        }
    }
    let elapsed = start.elapsed();

    println!(
        "{iterations} mazes of {n}x{n} in {:.2?} ({:.2?} per maze, {total_passages} passages total)",
        elapsed,
        elapsed / iterations as u32
    );
}
