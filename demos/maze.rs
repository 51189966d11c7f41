//! Terminal maze demo: every search in gsearch on one random maze.
//!
//! Run: cargo run --bin maze [seed]

use gsearch_demos::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    print!("{}", report(seed));
    Ok(())
}
