use std::time::Instant;

use mazecarve::{Algorithm, MazeError, generate_maze};

const SIZE: usize = u8::MAX as usize;

fn main() -> Result<(), MazeError> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for algorithm in Algorithm::ALL {
        let start = Instant::now();
        for seed in 0..num_iters as u64 {
            generate_maze(algorithm, SIZE, SIZE, Some(seed))?;
        }
        let elapsed = start.elapsed();
        tracing::info!(
            "{}: {} mazes of {}x{} in {:?} ({:?} each)",
            algorithm,
            num_iters,
            SIZE,
            SIZE,
            elapsed,
            elapsed / num_iters.max(1) as u32
        );
    }
    Ok(())
}
