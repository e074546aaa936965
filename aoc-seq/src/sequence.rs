//! The [`Sequence`] wrapper and its operator algebra

use std::fmt;
use std::fmt::Write as _;
use std::iter;

use crate::combinatorics::{Combinations, NCycle, Permutations, Pick, Powerset};
use crate::error::SequenceError;
use crate::windowing::{Chunks, Slice, Take, Windows};

/// A lazy, pull-based wrapper around a single underlying iterator.
///
/// `Sequence` owns its source and implements [`Iterator`] itself, so it
/// works in `for` loops and with every standard consumer. Its own
/// combinators are *inherent* methods: they stay available on the wrapper
/// without importing a trait, and the few that share a name with an
/// [`Iterator`] method (`take`, `count`, `reduce`) deliberately shadow it
/// with the signed-argument or fallible behavior this crate specifies.
///
/// Re-iterability follows the source. Wrapping a borrowed collection lets
/// the caller derive fresh sequences as often as it likes:
///
/// ```
/// use aoc_seq::Sequence;
///
/// let data = vec![1, 2, 3];
/// let doubled: Vec<i32> = Sequence::new(&data).map(|&x| x * 2).to_vec();
/// let again: Vec<i32> = Sequence::new(&data).map(|&x| x * 2).to_vec();
/// assert_eq!(doubled, again);
/// ```
///
/// Wrapping a single-use iterator (for example a `by_ref` borrow of one
/// cursor) is a single-traversal sequence: consuming it exhausts it, and
/// every sequence later derived from the same cursor observes exhaustion.
/// That hazard is intentional; callers needing several passes must
/// [`materialize`](Sequence::materialize) first.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    iter: I,
}

/// An infinite sequence repeating `val` for ever.
///
/// Consumers must bound it (`take`, `slice` with a non-negative window,
/// short-circuiting searches) or they will not terminate.
pub fn forever<T: Clone>(val: T) -> Sequence<iter::Repeat<T>> {
    Sequence::new(iter::repeat(val))
}

/// Concatenate an iterable of iterables, lazily.
///
/// Element N of source K + 1 is only realized after all of source K has
/// been drained.
///
/// # Example
///
/// ```
/// use aoc_seq::concat;
///
/// let all: Vec<i32> = concat(vec![vec![1, 2], vec![], vec![3]]).to_vec();
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn concat<S>(sources: S) -> Sequence<iter::Flatten<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Sequence::new(sources.into_iter().flatten())
}

/// Are two iterables element-wise equal?
///
/// Both sources are consumed up to the first mismatch.
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    a.into_iter().eq(b)
}

impl<I: Iterator> Sequence<I> {
    /// Wrap any iterable source.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    // ---- transformation ----

    /// Map a function over every element, lazily.
    ///
    /// Positional callbacks (the index-aware form) are spelled
    /// `seq.entries().map(|(i, item)| ...)`.
    pub fn map<U, F>(self, f: F) -> Sequence<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Sequence {
            iter: self.iter.map(f),
        }
    }

    /// Keep only the elements matching the predicate, lazily.
    pub fn filter<F>(self, f: F) -> Sequence<iter::Filter<I, F>>
    where
        F: FnMut(&I::Item) -> bool,
    {
        Sequence {
            iter: self.iter.filter(f),
        }
    }

    /// Map every element to an iterable and splice the results in
    /// element-by-element, flattening exactly one level.
    ///
    /// An atomic result is spelled `std::iter::once(value)`; there is no
    /// ambiguity about values that happen to be iterable, the return type
    /// decides.
    pub fn flat_map<U, F>(self, f: F) -> Sequence<iter::FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Sequence {
            iter: self.iter.flat_map(f),
        }
    }

    /// Splice in one level of nesting.
    ///
    /// Each call removes exactly one level, checked statically; deeper
    /// flattening is spelled by composing calls: `seq.flat().flat()`.
    pub fn flat(self) -> Sequence<iter::Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        Sequence {
            iter: self.iter.flatten(),
        }
    }

    /// Pair every element with its zero-based index in this traversal.
    pub fn entries(self) -> Sequence<iter::Enumerate<I>> {
        Sequence {
            iter: self.iter.enumerate(),
        }
    }

    /// Remove *consecutive* duplicates, comparing with `==`.
    ///
    /// Only runs of adjacent equal elements collapse; a later re-occurrence
    /// survives:
    ///
    /// ```
    /// use aoc_seq::Sequence;
    ///
    /// let deduped = Sequence::new(vec![1, 2, 2, 3, 2]).dedup().to_vec();
    /// assert_eq!(deduped, vec![1, 2, 3, 2]);
    /// ```
    pub fn dedup(self) -> Sequence<Dedup<I, fn(&I::Item, &I::Item) -> bool>>
    where
        I::Item: PartialEq + Clone,
    {
        fn eq<T: PartialEq>(a: &T, b: &T) -> bool {
            a == b
        }
        self.dedup_by(eq::<I::Item>)
    }

    /// Remove consecutive duplicates under a custom equality relation.
    ///
    /// The relation receives the candidate element and the immediately
    /// preceding *yielded* element.
    pub fn dedup_by<F>(self, eq: F) -> Sequence<Dedup<I, F>>
    where
        I::Item: Clone,
        F: FnMut(&I::Item, &I::Item) -> bool,
    {
        Sequence {
            iter: Dedup {
                iter: self.iter,
                last: None,
                eq,
            },
        }
    }

    // ---- combinatorial generation ----

    /// All length-`r` increasing-index subsequences, in lexicographic index
    /// order. Materializes the receiver.
    ///
    /// Empty output when `r` exceeds the source length.
    pub fn combinations(self, r: usize) -> Sequence<Combinations<I::Item>>
    where
        I::Item: Clone,
    {
        Sequence {
            iter: Combinations::new(self.iter.collect(), r),
        }
    }

    /// All ordered selections of `r` distinct positions, in position-cycling
    /// order. Materializes the receiver.
    ///
    /// Empty output when `r == 0`, `r` exceeds the source length, or the
    /// source is empty.
    pub fn permutations(self, r: usize) -> Sequence<Permutations<I::Item>>
    where
        I::Item: Clone,
    {
        Sequence {
            iter: Permutations::new(self.iter.collect(), r),
        }
    }

    /// Every subset, ordered by size then combination order. Materializes
    /// the receiver.
    pub fn powerset(self) -> Sequence<Powerset<I::Item>>
    where
        I::Item: Clone,
    {
        Sequence {
            iter: Powerset::new(self.iter.collect()),
        }
    }

    /// The source `n` times over: once streamed (buffering as it goes),
    /// then `n - 1` buffer replays. `n == 0` yields nothing.
    pub fn ncycle(self, n: usize) -> Sequence<NCycle<I>>
    where
        I::Item: Clone,
    {
        Sequence {
            iter: NCycle::new(self.iter, n),
        }
    }

    /// Indexed selection out of the materialized receiver: yields
    /// `pool[i]` for each `i` in `indices`, which may repeat or go
    /// backwards.
    ///
    /// Iteration panics on an out-of-range index, like slice indexing.
    pub fn pick<J>(self, indices: J) -> Sequence<Pick<I::Item, J::IntoIter>>
    where
        I::Item: Clone,
        J: IntoIterator<Item = usize>,
    {
        Sequence {
            iter: Pick::new(self.iter.collect(), indices.into_iter()),
        }
    }

    // ---- windowing, slicing, splitting ----

    /// Sliding windows of `size` elements, each yielded as a fresh `Vec`.
    ///
    /// The initial fill is yielded even when the source runs short of
    /// `size` (the first window is then short, possibly empty).
    pub fn windows(self, size: usize) -> Sequence<Windows<I>>
    where
        I::Item: Clone,
    {
        Sequence {
            iter: Windows::new(self.iter, size),
        }
    }

    /// Consecutive groups of exactly `size` elements, the last group
    /// shorter when the length is not a multiple of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidChunkSize`] for `size == 0`,
    /// before any iteration begins.
    pub fn chunks(self, size: usize) -> Result<Sequence<Chunks<I>>, SequenceError> {
        if size == 0 {
            return Err(SequenceError::InvalidChunkSize);
        }
        Ok(Sequence {
            iter: Chunks::new(self.iter, size),
        })
    }

    /// A portion of the sequence from `start` (inclusive) to `end`
    /// (exclusive), with `Vec`-slicing parity for negative indices.
    ///
    /// A negative `start` buffers the trailing `|start|` elements while
    /// draining the whole source, so it must not be used on an infinite
    /// sequence; a non-negative `start` with negative `end` holds back
    /// `|end|` elements in a bounded ring instead. `end` may be an `isize`
    /// or `None` for "to the end".
    ///
    /// ```
    /// use aoc_seq::range_to;
    ///
    /// assert_eq!(range_to(10).slice(-2, None).to_vec(), vec![8, 9]);
    /// assert_eq!(range_to(10).slice(-4, -1).to_vec(), vec![6, 7, 8]);
    /// ```
    pub fn slice(self, start: isize, end: impl Into<Option<isize>>) -> Sequence<Slice<I>> {
        Sequence {
            iter: Slice::new(self.iter, start, end.into()),
        }
    }

    /// Eagerly pull up to `size` elements into a `Vec`, returning it
    /// together with a sequence over the rest.
    ///
    /// The remainder owns the advanced cursor; the head `Vec` is shorter
    /// than `size` when the source ran out first.
    pub fn split(mut self, size: usize) -> (Vec<I::Item>, Sequence<I>) {
        let head: Vec<_> = self.iter.by_ref().take(size).collect();
        (head, self)
    }

    /// The first `n` elements, or with negative `n` everything *except*
    /// the last `|n|` (`take(-n)` ≡ [`trunc`](Sequence::trunc)`(n)`).
    pub fn take(self, n: isize) -> Sequence<Take<I>> {
        let iter = if n >= 0 {
            Take::front(self.iter, n as usize)
        } else {
            Take::back(self.iter, n.unsigned_abs())
        };
        Sequence { iter }
    }

    /// Everything except the last `n` elements, or with negative `n` the
    /// first `|n|` (`trunc(-n)` ≡ [`take`](Sequence::take)`(n)`).
    /// `trunc(0)` passes the source through unchanged.
    pub fn trunc(self, n: isize) -> Sequence<Take<I>> {
        let iter = if n >= 0 {
            Take::back(self.iter, n as usize)
        } else {
            Take::front(self.iter, n.unsigned_abs())
        };
        Sequence { iter }
    }

    /// Skip the first `size` elements at the start of traversal, then
    /// yield the rest lazily.
    pub fn discard(self, size: usize) -> Sequence<iter::Skip<I>> {
        Sequence {
            iter: self.iter.skip(size),
        }
    }

    // ---- aggregation ----

    /// Number of elements.
    ///
    /// O(1) when the underlying iterator reports an exact length
    /// (materialized vectors, slices, ranges, map/set iterators), else a
    /// full O(n) traversal. Does not terminate on an infinite source.
    pub fn count(self) -> usize {
        match self.iter.size_hint() {
            (lo, Some(hi)) if lo == hi => lo,
            _ => self.iter.count(),
        }
    }

    /// Fold the sequence with its own first element as the seed.
    ///
    /// For the seeded form use [`Iterator::fold`], which returns the
    /// initializer unchanged on an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] when the sequence yields
    /// no elements.
    pub fn reduce<F>(mut self, f: F) -> Result<I::Item, SequenceError>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let first = self.iter.next().ok_or(SequenceError::EmptySequence)?;
        Ok(self.iter.fold(first, f))
    }

    /// Concatenate the `Display` form of every element, with `sep`
    /// between them. Requires a finite sequence.
    pub fn join(self, sep: &str) -> String
    where
        I::Item: fmt::Display,
    {
        let mut out = String::new();
        for (i, item) in self.iter.enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            let _ = write!(out, "{item}");
        }
        out
    }

    /// Materialize into a `Vec`, consuming the sequence. Does not
    /// terminate on an infinite source.
    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Materialize into a vector-backed sequence whose iterator is
    /// cloneable and reports an exact length, making later passes cheap
    /// and repeatable.
    pub fn materialize(self) -> Sequence<std::vec::IntoIter<I::Item>> {
        Sequence::new(self.iter.collect::<Vec<_>>())
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Consecutive-duplicate filter created by [`Sequence::dedup`] and
/// [`Sequence::dedup_by`].
#[derive(Debug, Clone)]
pub struct Dedup<I: Iterator, F> {
    iter: I,
    last: Option<I::Item>,
    eq: F,
}

impl<I, F> Iterator for Dedup<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            match &self.last {
                Some(prev) if (self.eq)(&item, prev) => continue,
                _ => {
                    self.last = Some(item.clone());
                    return Some(item);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range_to;

    #[test]
    fn wraps_any_iterable() {
        assert_eq!(Sequence::new(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
        assert_eq!(Sequence::new(1..=3).to_vec(), vec![1, 2, 3]);
        let set: Vec<char> = Sequence::new("hi".chars()).to_vec();
        assert_eq!(set, vec!['h', 'i']);
    }

    #[test]
    fn transforms_compose_lazily() {
        let odds_squared = range_to(10)
            .filter(|n| n % 2 == 1)
            .map(|n| n * n)
            .to_vec();
        assert_eq!(odds_squared, vec![1, 9, 25, 49, 81]);
    }

    #[test]
    fn flat_map_and_flat() {
        let doubled_pairs = Sequence::new(vec![1, 2])
            .flat_map(|n| vec![n, n * 10])
            .to_vec();
        assert_eq!(doubled_pairs, vec![1, 10, 2, 20]);

        let nested = Sequence::new(vec![vec![1, 2], vec![3]]).flat().to_vec();
        assert_eq!(nested, vec![1, 2, 3]);
    }

    #[test]
    fn entries_pairs_indices() {
        let pairs = Sequence::new("ab".chars()).entries().to_vec();
        assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
    }

    #[test]
    fn dedup_is_consecutive_only() {
        assert_eq!(
            Sequence::new(vec![1, 2, 2, 3, 2]).dedup().to_vec(),
            vec![1, 2, 3, 2]
        );
        let by_parity = Sequence::new(vec![1, 3, 2, 4, 5])
            .dedup_by(|a, b| a % 2 == b % 2)
            .to_vec();
        assert_eq!(by_parity, vec![1, 2, 5]);
    }

    #[test]
    fn split_hands_over_the_cursor() {
        let (head, rest) = range_to(5).split(2);
        assert_eq!(head, vec![0, 1]);
        assert_eq!(rest.to_vec(), vec![2, 3, 4]);

        let (short, rest) = range_to(2).split(10);
        assert_eq!(short, vec![0, 1]);
        assert!(rest.to_vec().is_empty());
    }

    #[test]
    fn reduce_and_fold_on_empty() {
        let sum = range_to(5).reduce(|a, b| a + b).unwrap();
        assert_eq!(sum, 10);
        assert_eq!(
            range_to(0).reduce(|a, b| a + b),
            Err(SequenceError::EmptySequence)
        );
        assert_eq!(range_to(0).fold(42, |a, b| a + b), 42);
    }

    #[test]
    fn join_formats_elements() {
        assert_eq!(range_to(4).join(","), "0,1,2,3");
        assert_eq!(range_to(0).join(","), "");
        assert_eq!(Sequence::new("abc".chars()).join(""), "abc");
    }

    #[test]
    fn count_uses_exact_size_hints() {
        assert_eq!(range_to(1_000_000).count(), 1_000_000);
        // Filtered iterators lose the exact hint and fall back to traversal.
        assert_eq!(range_to(10).filter(|n| n % 2 == 0).count(), 5);
    }

    #[test]
    fn concat_drains_in_order() {
        let all = concat(vec![vec![1], vec![2, 3], vec![]]).to_vec();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn equal_compares_elementwise() {
        assert!(equal(range_to(3), vec![0, 1, 2]));
        assert!(!equal(range_to(3), vec![0, 1]));
        assert!(!equal(range_to(3), vec![0, 1, 5]));
    }

    #[test]
    fn forever_must_be_bounded() {
        assert_eq!(forever('x').take(3).join(""), "xxx");
    }

    #[test]
    fn materialize_allows_cheap_repeat_passes() {
        let s = range_to(4).filter(|n| *n != 2).materialize();
        assert_eq!(s.clone().count(), 3);
        assert_eq!(s.to_vec(), vec![0, 1, 3]);
    }
}
