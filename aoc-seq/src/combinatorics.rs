//! Combinatorial generators
//!
//! Every generator here materializes its receiver into a pool up front
//! (paying O(n) time and memory before the first yield) and is lazy only on
//! the output side. The orders are the reference orders of Python's
//! `itertools`: lexicographic index order for combinations, the
//! position-cycling order for permutations, size-major order for power sets
//! and odometer order for the Cartesian product.

use crate::sequence::Sequence;

/// Iterator created by [`Sequence::combinations`](crate::Sequence::combinations).
///
/// Yields every increasing-index subsequence of length `r` in lexicographic
/// index order, using the revolving-door index update: advance the rightmost
/// index that has room, then reset every index to its right to consecutive
/// values. Yields nothing when `r` exceeds the pool length.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    r: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl<T> Combinations<T> {
    pub(crate) fn new(pool: Vec<T>, r: usize) -> Self {
        Self {
            pool,
            r,
            indices: Vec::new(),
            first: true,
            done: false,
        }
    }
}

impl<T: Clone> Combinations<T> {
    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let n = self.pool.len();
        let r = self.r;
        if self.first {
            self.first = false;
            if r > n {
                self.done = true;
                return None;
            }
            self.indices = (0..r).collect();
            return Some(self.emit());
        }

        // Rightmost index not yet at its maximum allowed value.
        let mut i = r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - r {
                break;
            }
        }
        self.indices[i] += 1;
        let mut pivot = self.indices[i];
        for j in i + 1..r {
            pivot += 1;
            self.indices[j] = pivot;
        }
        Some(self.emit())
    }
}

/// Iterator created by [`Sequence::permutations`](crate::Sequence::permutations).
///
/// Yields every ordered selection of `r` distinct positions from the pool.
/// The order is not lexicographic on values: each of the `r` active slots
/// cycles through the remaining pool before the slot to its left advances,
/// driven by a per-slot decreasing cycle counter. Yields nothing when `r`
/// is zero, exceeds the pool length, or the pool is empty.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    r: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    first: bool,
    done: bool,
}

impl<T> Permutations<T> {
    pub(crate) fn new(pool: Vec<T>, r: usize) -> Self {
        Self {
            pool,
            r,
            indices: Vec::new(),
            cycles: Vec::new(),
            first: true,
            done: false,
        }
    }
}

impl<T: Clone> Permutations<T> {
    fn emit(&self) -> Vec<T> {
        self.indices[..self.r]
            .iter()
            .map(|&i| self.pool[i].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let n = self.pool.len();
        let r = self.r;
        if self.first {
            self.first = false;
            if r == 0 || r > n {
                self.done = true;
                return None;
            }
            self.indices = (0..n).collect();
            // cycles = n, n - 1, ..., n - r + 1
            self.cycles = ((n - r + 1)..=n).rev().collect();
            return Some(self.emit());
        }

        let mut i = r;
        while i > 0 {
            i -= 1;
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // Rotate position i to the back of the index pool.
                let idx = self.indices.remove(i);
                self.indices.push(idx);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return Some(self.emit());
            }
        }
        self.done = true;
        None
    }
}

/// Iterator created by [`Sequence::powerset`](crate::Sequence::powerset).
///
/// Yields every subset of the pool, the empty set and the full set included,
/// ordered by increasing subset size and within each size by
/// [`Combinations`] order.
#[derive(Debug, Clone)]
pub struct Powerset<T> {
    pool: Vec<T>,
    r: usize,
    inner: Combinations<T>,
}

impl<T: Clone> Powerset<T> {
    pub(crate) fn new(pool: Vec<T>) -> Self {
        let inner = Combinations::new(pool.clone(), 0);
        Self { pool, r: 0, inner }
    }
}

impl<T: Clone> Iterator for Powerset<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.inner.next() {
                return Some(subset);
            }
            if self.r >= self.pool.len() {
                return None;
            }
            self.r += 1;
            self.inner = Combinations::new(self.pool.clone(), self.r);
        }
    }
}

/// Cartesian product of the given pools in odometer order, the rightmost
/// pool varying fastest.
///
/// Each pool is materialized up front and the whole pool list is repeated
/// `repeat` times. Zero pools (or `repeat == 0`) yield exactly one empty
/// selection; any empty pool yields nothing.
///
/// # Example
///
/// ```
/// use aoc_seq::product;
///
/// let grid: Vec<Vec<i32>> = product(vec![vec![0, 1], vec![4, 5]], 1).to_vec();
/// assert_eq!(grid, vec![
///     vec![0, 4], vec![0, 5],
///     vec![1, 4], vec![1, 5],
/// ]);
/// ```
pub fn product<P, Q, T>(pools: P, repeat: usize) -> Sequence<Product<T>>
where
    P: IntoIterator<Item = Q>,
    Q: IntoIterator<Item = T>,
    T: Clone,
{
    let base: Vec<Vec<T>> = pools
        .into_iter()
        .map(|pool| pool.into_iter().collect())
        .collect();
    let mut all = Vec::with_capacity(base.len() * repeat);
    for _ in 0..repeat {
        all.extend(base.iter().cloned());
    }
    let indices = vec![0; all.len()];
    Sequence::new(Product {
        pools: all,
        indices,
        done: false,
    })
}

/// Iterator state for [`product`].
#[derive(Debug, Clone)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    done: bool,
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pools.iter().any(|pool| pool.is_empty()) {
            self.done = true;
            return None;
        }
        let selection: Vec<T> = self
            .indices
            .iter()
            .zip(&self.pools)
            .map(|(&i, pool)| pool[i].clone())
            .collect();

        // Advance the odometer, rightmost wheel first.
        let mut k = self.pools.len();
        loop {
            if k == 0 {
                self.done = true;
                break;
            }
            k -= 1;
            self.indices[k] += 1;
            if self.indices[k] < self.pools[k].len() {
                break;
            }
            self.indices[k] = 0;
        }
        Some(selection)
    }
}

/// Iterator created by [`Sequence::ncycle`](crate::Sequence::ncycle).
///
/// Streams the source once while buffering every element seen, then replays
/// the buffer `n - 1` more times. `n == 0` yields nothing, as does an empty
/// source for any `n`. The buffer is only kept when a replay will actually
/// happen.
#[derive(Debug, Clone)]
pub struct NCycle<I: Iterator> {
    iter: I,
    buf: Vec<I::Item>,
    remaining: usize,
    in_source: bool,
    pos: usize,
}

impl<I: Iterator> NCycle<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self {
            iter,
            buf: Vec::new(),
            remaining: n,
            in_source: n > 0,
            pos: 0,
        }
    }
}

impl<I> Iterator for NCycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.in_source {
            match self.iter.next() {
                Some(item) => {
                    if self.remaining > 1 {
                        self.buf.push(item.clone());
                    }
                    return Some(item);
                }
                None => {
                    self.in_source = false;
                    self.remaining -= 1;
                    self.pos = 0;
                }
            }
        }
        while self.remaining > 0 {
            if self.buf.is_empty() {
                self.remaining = 0;
                return None;
            }
            if self.pos < self.buf.len() {
                let item = self.buf[self.pos].clone();
                self.pos += 1;
                return Some(item);
            }
            self.pos = 0;
            self.remaining -= 1;
        }
        None
    }
}

/// Iterator created by [`Sequence::pick`](crate::Sequence::pick).
///
/// Materializes the receiver and yields `pool[i]` for each index produced by
/// the index iterable, in index-iterable order (indices may repeat or go
/// backwards).
#[derive(Debug, Clone)]
pub struct Pick<T, J> {
    pool: Vec<T>,
    indices: J,
}

impl<T, J> Pick<T, J> {
    pub(crate) fn new(pool: Vec<T>, indices: J) -> Self {
        Self { pool, indices }
    }
}

impl<T, J> Iterator for Pick<T, J>
where
    T: Clone,
    J: Iterator<Item = usize>,
{
    type Item = T;

    /// # Panics
    ///
    /// Panics when an index is out of range, like slice indexing.
    fn next(&mut self) -> Option<T> {
        let i = self.indices.next()?;
        Some(self.pool[i].clone())
    }
}
