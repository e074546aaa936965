//! Example demonstrating weighted pair counting
//!
//! Runs a few steps of pair-insertion polymer growth without ever
//! materializing the polymer string: each generation is a Counter of
//! adjacent pairs, folded into the next with add_weighted.
//!
//! Run with: cargo run --example polymer_growth

use aoc_counter::Counter;
use std::collections::HashMap;

fn main() {
    let template = "NNCB";
    let rules: HashMap<(char, char), char> = [
        (('N', 'N'), 'C'),
        (('N', 'C'), 'B'),
        (('C', 'B'), 'H'),
        (('C', 'N'), 'C'),
        (('N', 'B'), 'B'),
        (('B', 'N'), 'B'),
        (('B', 'B'), 'N'),
        (('B', 'C'), 'B'),
        (('C', 'C'), 'N'),
        (('C', 'H'), 'B'),
        (('H', 'B'), 'C'),
        (('H', 'C'), 'B'),
        (('H', 'H'), 'N'),
        (('H', 'N'), 'C'),
        (('B', 'H'), 'H'),
        (('N', 'H'), 'C'),
    ]
    .into_iter()
    .collect();

    let chars: Vec<char> = template.chars().collect();
    let mut pairs: Counter<(char, char)> =
        chars.windows(2).map(|w| (w[0], w[1])).collect();

    for step in 1..=10 {
        let mut next = Counter::new();
        for (&(a, b), &n) in &pairs {
            match rules.get(&(a, b)) {
                Some(&mid) => {
                    next.add_weighted(n, (a, mid));
                    next.add_weighted(n, (mid, b));
                }
                None => {
                    next.add_weighted(n, (a, b));
                }
            }
        }
        pairs = next;
        println!("after step {step}: {} distinct pairs", pairs.len());
    }

    // Each element is the first of exactly one pair, except the last.
    let mut elements = Counter::new();
    for (&(a, _), &n) in &pairs {
        elements.add_weighted(n, a);
    }
    if let Some(&last) = chars.last() {
        elements.add(last);
    }

    if let Some((most, count)) = elements.max() {
        println!("most common element: {most} x{count}");
    }
}
