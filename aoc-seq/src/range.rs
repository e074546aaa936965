//! Python-style numeric ranges
//!
//! [`range`], [`range_step`] and [`range_to`] mirror Python's `range()`
//! builtin: the stop bound is never reached, a negative step counts down,
//! and a range whose step points away from its stop bound is empty.

use crate::sequence::Sequence;

/// Create the sequence `start, start + 1, ..., stop - 1`.
///
/// Empty when `stop <= start`.
///
/// # Example
///
/// ```
/// use aoc_seq::range;
///
/// assert_eq!(range(2, 5).to_vec(), vec![2, 3, 4]);
/// assert!(range(5, 2).to_vec().is_empty());
/// ```
pub fn range(start: i64, stop: i64) -> Sequence<Range> {
    range_step(start, stop, 1)
}

/// Create the sequence `0, 1, ..., stop - 1`.
///
/// The argument-elision form of [`range`]: `range_to(n)` is `range(0, n)`.
pub fn range_to(stop: i64) -> Sequence<Range> {
    range_step(0, stop, 1)
}

/// Create a range with an explicit step, which may be negative.
///
/// A negative step yields the strictly decreasing sequence
/// `start, start + step, ...` while it stays above `stop`; a positive step
/// the strictly increasing one while it stays below `stop`. The range is
/// empty when the step cannot reach `stop` from `start`.
///
/// # Panics
///
/// Panics when `step` is zero, like [`Iterator::step_by`].
///
/// # Example
///
/// ```
/// use aoc_seq::range_step;
///
/// assert_eq!(range_step(5, 1, -1).to_vec(), vec![5, 4, 3, 2]);
/// assert_eq!(range_step(0, 10, 3).to_vec(), vec![0, 3, 6, 9]);
/// ```
pub fn range_step(start: i64, stop: i64, step: i64) -> Sequence<Range> {
    assert!(step != 0, "range step must be nonzero");
    Sequence::new(Range {
        next: start,
        stop,
        step,
    })
}

/// Iterator state for [`range`], [`range_step`] and [`range_to`].
#[derive(Debug, Clone)]
pub struct Range {
    next: i64,
    stop: i64,
    step: i64,
}

impl Range {
    fn remaining(&self) -> usize {
        let gap = if self.step < 0 {
            self.next.saturating_sub(self.stop)
        } else {
            self.stop.saturating_sub(self.next)
        };
        if gap <= 0 {
            return 0;
        }
        let step = self.step.unsigned_abs();
        ((gap as u64 + step - 1) / step) as usize
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let exhausted = if self.step < 0 {
            self.next <= self.stop
        } else {
            self.next >= self.stop
        };
        if exhausted {
            return None;
        }
        let val = self.next;
        self.next += self.step;
        Some(val)
    }

    // Exact, so `Sequence::count` stays O(1) on ranges.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}
