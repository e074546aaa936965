//! Multiset Counter
//!
//! A small tallying map from typed keys to signed occurrence counts, for
//! "how many of each state have we seen" bookkeeping in puzzle solvers.
//!
//! # Overview
//!
//! - [`Counter::add`] increments a key by one; [`Counter::add_weighted`]
//!   by an arbitrary signed delta, for pre-aggregated inputs
//! - [`Counter::total`], [`Counter::count_matching`] and
//!   [`Counter::sum_where`] reduce over all entries: total count, number
//!   of distinct keys satisfying a predicate, or a caller-weighted sum
//! - [`Counter::max`] finds the most frequent entry
//! - Entries are never removed individually; the counter is discarded
//!   wholesale
//!
//! Keys stay fully typed: any `Eq + Hash` type works, and tuples make
//! natural composite keys with no information loss. Callers porting the
//! joined-string key convention can opt into it with [`join_key`], value
//! loss and all.
//!
//! # Quick Example
//!
//! ```
//! use aoc_counter::Counter;
//!
//! let mut polymer = Counter::new();
//! for pair in [('N', 'N'), ('N', 'C'), ('C', 'B'), ('N', 'C')] {
//!     polymer.add(pair);
//! }
//! assert_eq!(polymer.get(&('N', 'C')), 2);
//! assert_eq!(polymer.total(), 4);
//! assert_eq!(polymer.max(), Some((&('N', 'C'), 2)));
//! ```

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::fmt::Write as _;
use std::hash::Hash;

/// A mapping from keys to signed occurrence counts.
#[derive(Debug, Clone)]
pub struct Counter<K> {
    counts: HashMap<K, i64>,
}

impl<K> Counter<K> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Has nothing been counted yet?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(key, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, i64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K: Eq + Hash> Counter<K> {
    /// Count one occurrence of `key`, returning the new count.
    pub fn add(&mut self, key: K) -> i64 {
        self.add_weighted(1, key)
    }

    /// Count `weight` occurrences of `key` at once, returning the new
    /// count. Useful when the input is already aggregated (for example
    /// folding one generation of pair counts into the next).
    pub fn add_weighted(&mut self, weight: i64, key: K) -> i64 {
        let count = self.counts.entry(key).or_insert(0);
        *count += weight;
        *count
    }

    /// The count recorded for `key`, zero if never seen.
    pub fn get(&self, key: &K) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Number of distinct keys whose entry satisfies the predicate.
    ///
    /// The predicate receives the count and the key. Together with
    /// [`sum_where`](Counter::sum_where) this covers both "how many keys
    /// satisfy X" and "sum of counts under X" with explicit signatures.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_counter::Counter;
    ///
    /// let mut c = Counter::new();
    /// c.add("a");
    /// c.add("a");
    /// c.add("a");
    /// c.add("b");
    /// assert_eq!(c.count_matching(|count, _| count > 1), 1);
    /// assert_eq!(c.sum_where(|count, _| count), 4);
    /// ```
    pub fn count_matching<F>(&self, mut pred: F) -> i64
    where
        F: FnMut(i64, &K) -> bool,
    {
        self.counts.iter().filter(|&(k, &c)| pred(c, k)).count() as i64
    }

    /// Sum over all entries of a caller-supplied weight.
    ///
    /// The weight function receives the count and the key and contributes
    /// its return value directly.
    pub fn sum_where<F>(&self, mut weight: F) -> i64
    where
        F: FnMut(i64, &K) -> i64,
    {
        self.counts.iter().map(|(k, &c)| weight(c, k)).sum()
    }

    /// The entry with the largest count, or `None` on an empty counter.
    /// Ties break arbitrarily.
    pub fn max(&self) -> Option<(&K, i64)> {
        self.counts.iter().map(|(k, &c)| (k, c)).max_by_key(|&(_, c)| c)
    }
}

impl<K> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut counter = Self::new();
        counter.extend(keys);
        counter
    }
}

impl<K: Eq + Hash> Extend<K> for Counter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Counter<K> {
    type Item = (&'a K, &'a i64);
    type IntoIter = hash_map::Iter<'a, K, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Build a comma-joined composite key from a tuple of displayable values.
///
/// This reproduces the stringified-tuple key convention: cheap, hashable,
/// and *lossy* — the original typed values cannot be recovered from the
/// key. Callers needing them back must keep a side mapping, or use a
/// typed tuple key instead.
///
/// # Example
///
/// ```
/// use aoc_counter::{Counter, join_key};
///
/// let mut c = Counter::new();
/// c.add(join_key([3, 7]));
/// assert_eq!(c.get(&"3,7".to_string()), 1);
/// ```
pub fn join_key<T, I>(vals: I) -> String
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut key = String::new();
    for (i, val) in vals.into_iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        let _ = write!(key, "{val}");
    }
    key
}
