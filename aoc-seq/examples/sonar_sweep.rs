//! Example demonstrating the windowing and aggregation operators
//!
//! Solves both halves of the classic "sonar sweep" depth puzzle:
//! - part 1 counts adjacent depth increases with windows(2)
//! - part 2 smooths with three-wide sums first, then counts increases
//!
//! Run with: cargo run --example sonar_sweep

use aoc_seq::Sequence;

fn main() {
    let depths = vec![199, 200, 208, 210, 200, 207, 240, 269, 260, 263];

    let part1 = Sequence::new(&depths)
        .windows(2)
        .filter(|w| w[1] > w[0])
        .count();
    println!("part 1: {part1} increases");

    let smoothed: Vec<i32> = Sequence::new(&depths)
        .windows(3)
        .map(|w| w.iter().copied().sum())
        .to_vec();
    let part2 = Sequence::new(&smoothed)
        .windows(2)
        .filter(|w| w[1] > w[0])
        .count();
    println!("part 2: {part2} increases");
}
