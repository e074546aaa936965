//! Property-based tests for the sequence algebra: range laws, take/trunc
//! duality, slicing parity with `Vec`, and the exact generator orders.

use aoc_seq::{Sequence, concat, equal, forever, product, range, range_step, range_to};
use proptest::prelude::*;

/// Reference slice with `Vec` semantics for signed indices.
fn vec_slice(v: &[i32], start: isize, end: Option<isize>) -> Vec<i32> {
    let len = v.len() as isize;
    let lo = if start < 0 {
        (len + start).max(0)
    } else {
        start.min(len)
    };
    let hi = match end {
        None => len,
        Some(e) if e < 0 => (len + e).max(0),
        Some(e) => e.min(len),
    };
    if hi <= lo {
        Vec::new()
    } else {
        v[lo as usize..hi as usize].to_vec()
    }
}

proptest! {
    /// `range(a, b)` has length `b - a`, starts at `a` and strictly
    /// increases by one; the `-1`-stepped mirror strictly decreases.
    #[test]
    fn prop_range_laws(a in -500i64..500, len in 0i64..200) {
        let b = a + len;
        let up = range(a, b).to_vec();
        prop_assert_eq!(up.len() as i64, len);
        if len > 0 {
            prop_assert_eq!(up[0], a);
            prop_assert_eq!(*up.last().unwrap(), b - 1);
        }
        for w in up.windows(2) {
            prop_assert_eq!(w[1], w[0] + 1);
        }

        let down = range_step(b, a, -1).to_vec();
        prop_assert_eq!(down.len() as i64, len);
        if len > 0 {
            prop_assert_eq!(down[0], b);
            prop_assert_eq!(*down.last().unwrap(), a + 1);
        }
        for w in down.windows(2) {
            prop_assert_eq!(w[1], w[0] - 1);
        }
    }

    /// `take(n)` plus the discarded remainder reconstructs the source,
    /// and for nonzero `n` negative arguments swap `take` and `trunc`
    /// (at zero the two differ: `take(0)` is empty, `trunc(0)` is the
    /// identity, pinned exactly in the windowing unit tests).
    #[test]
    fn prop_take_trunc_complementarity(
        v in proptest::collection::vec(any::<i32>(), 0..40),
        n in 1isize..50,
    ) {
        let mut front = Sequence::new(&v).take(n).to_vec();
        let back = Sequence::new(&v).discard(n as usize).to_vec();
        front.extend(back);
        prop_assert_eq!(&front.into_iter().copied().collect::<Vec<_>>(), &v);

        prop_assert_eq!(
            Sequence::new(&v).take(-n).to_vec(),
            Sequence::new(&v).trunc(n).to_vec()
        );
        prop_assert_eq!(
            Sequence::new(&v).trunc(-n).to_vec(),
            Sequence::new(&v).take(n).to_vec()
        );
    }

    /// `trunc(n)` drops exactly the last `n` elements.
    #[test]
    fn prop_trunc_drops_tail(
        v in proptest::collection::vec(any::<i32>(), 0..40),
        n in 0usize..50,
    ) {
        let kept: Vec<i32> = Sequence::new(&v).trunc(n as isize).to_vec()
            .into_iter().copied().collect();
        let expected = &v[..v.len().saturating_sub(n)];
        prop_assert_eq!(kept, expected.to_vec());
    }

    /// `slice` agrees with `Vec` slicing for every signed index pair.
    #[test]
    fn prop_slice_vec_parity(
        v in proptest::collection::vec(any::<i32>(), 0..30),
        start in -35isize..35,
        end in proptest::option::of(-35isize..35),
    ) {
        let sliced: Vec<i32> = Sequence::new(&v).slice(start, end).to_vec()
            .into_iter().copied().collect();
        prop_assert_eq!(sliced, vec_slice(&v, start, end));
    }

    /// Chunks are full-sized except possibly the last, and concatenating
    /// them reconstructs the source.
    #[test]
    fn prop_chunks_reconstruct(
        v in proptest::collection::vec(any::<i32>(), 0..40),
        n in 1usize..10,
    ) {
        let chunks = Sequence::new(v.iter().copied()).chunks(n).unwrap().to_vec();
        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            prop_assert_eq!(chunk.len(), n);
        }
        if let Some(last) = chunks.last() {
            prop_assert!(!last.is_empty() && last.len() <= n);
        }
        let rebuilt: Vec<i32> = concat(chunks).to_vec();
        prop_assert_eq!(rebuilt, v);
    }

    /// `ncycle(n)` is the source repeated `n` times.
    #[test]
    fn prop_ncycle_repeats(
        v in proptest::collection::vec(any::<i32>(), 0..15),
        n in 0usize..5,
    ) {
        let cycled = Sequence::new(v.iter().copied()).ncycle(n).to_vec();
        let expected: Vec<i32> = v.iter().copied().cycle().take(
            if v.is_empty() { 0 } else { v.len() * n }
        ).collect();
        prop_assert_eq!(cycled, expected);
    }

    /// Seedless `reduce` equals a fold seeded with the first element.
    #[test]
    fn prop_reduce_matches_seeded_fold(
        v in proptest::collection::vec(any::<i32>(), 1..30),
    ) {
        let reduced = Sequence::new(v.iter().copied())
            .reduce(|a, b| a.wrapping_add(b))
            .unwrap();
        let folded = v[1..].iter().fold(v[0], |a, &b| a.wrapping_add(b));
        prop_assert_eq!(reduced, folded);
    }

    /// Two-pool product equals the nested-loop cross in odometer order.
    #[test]
    fn prop_product_odometer_order(
        a in proptest::collection::vec(any::<i8>(), 0..6),
        b in proptest::collection::vec(any::<i8>(), 0..6),
    ) {
        let crossed = product(vec![a.clone(), b.clone()], 1).to_vec();
        let mut expected = Vec::new();
        for &x in &a {
            for &y in &b {
                expected.push(vec![x, y]);
            }
        }
        prop_assert_eq!(crossed, expected);
    }

    /// Dedup removes exactly the adjacent duplicates.
    #[test]
    fn prop_dedup_consecutive_only(
        v in proptest::collection::vec(0i32..5, 0..40),
    ) {
        let deduped = Sequence::new(v.iter().copied()).dedup().to_vec();
        let mut expected: Vec<i32> = Vec::new();
        for &x in &v {
            if expected.last() != Some(&x) {
                expected.push(x);
            }
        }
        prop_assert_eq!(deduped, expected);
    }

    /// Combination counts match the binomial coefficient, and every
    /// combination is strictly increasing in source index order.
    #[test]
    fn prop_combinations_count(n in 0usize..8, r in 0usize..10) {
        let combos = range_to(n as i64).combinations(r).to_vec();
        let binom = |n: usize, r: usize| -> usize {
            if r > n {
                return 0;
            }
            (1..=r).fold(1usize, |acc, i| acc * (n - r + i) / i)
        };
        prop_assert_eq!(combos.len(), binom(n, r));
        for combo in &combos {
            for pair in combo.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}

mod unit_tests {
    use super::*;
    use aoc_seq::SequenceError;

    #[test]
    fn range_elision_matches_explicit_form() {
        assert_eq!(range_to(4).to_vec(), vec![0, 1, 2, 3]);
        assert!(equal(range_to(4), range(0, 4)));
    }

    #[test]
    fn negative_take_is_trunc() {
        assert_eq!(range_to(10).take(-3).to_vec(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn combinations_exact_order() {
        assert_eq!(
            range_to(3).combinations(2).to_vec(),
            vec![vec![0, 1], vec![0, 2], vec![1, 2]]
        );
        assert!(range(0, 3).combinations(5).to_vec().is_empty());
    }

    #[test]
    fn permutations_exact_order() {
        let perms: Vec<String> = Sequence::new("ABCD".chars())
            .permutations(2)
            .map(|p| p.into_iter().collect())
            .to_vec();
        assert_eq!(
            perms,
            vec!["AB", "AC", "AD", "BA", "BC", "BD", "CA", "CB", "CD", "DA", "DB", "DC"]
        );
    }

    #[test]
    fn powerset_exact_order() {
        let sets: Vec<String> = Sequence::new("ABC".chars())
            .powerset()
            .map(|s| s.into_iter().collect())
            .to_vec();
        assert_eq!(sets, vec!["", "A", "B", "C", "AB", "AC", "BC", "ABC"]);
    }

    #[test]
    fn slice_negative_index_cases() {
        assert_eq!(range_to(10).slice(-2, None).to_vec(), vec![8, 9]);
        assert_eq!(
            range_to(10).slice(0, -1).to_vec(),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(range_to(10).slice(-4, -1).to_vec(), vec![6, 7, 8]);
        assert_eq!(range_to(10).slice(0, -12).to_vec(), Vec::<i64>::new());
    }

    #[test]
    fn reduce_empty_needs_initializer() {
        assert_eq!(
            Sequence::new(Vec::<i32>::new()).reduce(|a, b| a + b),
            Err(SequenceError::EmptySequence)
        );
        assert_eq!(Sequence::new(Vec::<i32>::new()).fold(7, |a, b| a + b), 7);
    }

    #[test]
    fn rederiving_from_a_collection_is_repeatable() {
        let data = vec![1, 2, 3, 4];
        let derive = |src: &Vec<i32>| {
            Sequence::new(src)
                .map(|&x| x * 2)
                .filter(|x| x % 4 == 0)
                .to_vec()
        };
        assert_eq!(derive(&data), vec![4, 8]);
        assert_eq!(derive(&data), vec![4, 8]);
    }

    #[test]
    fn rederiving_from_a_single_use_cursor_observes_exhaustion() {
        // One shared cursor: the second derived pass sees nothing. This is
        // the intended single-traversal contract, not a defect.
        let data = vec![1, 2, 3, 4];
        let mut cursor = data.iter();
        let first: Vec<i32> = Sequence::new(cursor.by_ref()).map(|&x| x * 2).to_vec();
        let second: Vec<i32> = Sequence::new(cursor.by_ref()).map(|&x| x * 2).to_vec();
        assert_eq!(first, vec![2, 4, 6, 8]);
        assert!(second.is_empty());
    }

    #[test]
    fn forever_bounded_by_searches() {
        // Short-circuiting consumers stop pulling; no hang.
        let mut sevens = forever(7);
        assert!(sevens.any(|x| x == 7));
        let found = forever(3).entries().find(|&(i, _)| i == 5);
        assert_eq!(found, Some((5, 3)));
    }

    #[test]
    fn windows_copy_per_yield_can_be_retained() {
        let all: Vec<Vec<i32>> = Sequence::new(1..=4).windows(2).to_vec();
        // Every window survives unmutated after iteration finished.
        assert_eq!(all, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
    }

    #[test]
    fn split_then_chain_reconstructs() {
        let (head, rest) = range_to(7).split(3);
        let rebuilt: Vec<i64> = Sequence::new(head.into_iter()).chain(rest).collect();
        assert_eq!(rebuilt, range_to(7).to_vec());
    }
}
