//! Lazy Sequence Toolkit
//!
//! A composable, lazily-evaluated sequence algebra for puzzle solving:
//! Python-style ranges, combinatorial generators, windowing and signed
//! slicing, all as pull-based iterator adaptors over a single ownership
//! wrapper.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Sequence`] wrapper: owns one iteration source, implements
//!   [`Iterator`], and exposes the whole operator algebra as inherent
//!   methods so chains never leave the wrapper
//! - Sources: [`range`]/[`range_step`]/[`range_to`], [`forever`],
//!   [`concat`] and the Cartesian [`product`]
//! - Transformation: `map`, `filter`, `flat_map`, `flat`, `entries`,
//!   `dedup`/`dedup_by`
//! - Combinatorics: `combinations`, `permutations`, `powerset`, `ncycle`,
//!   `pick`, in the reference orders of Python's `itertools`
//! - Windowing and slicing: `windows`, `chunks`, `slice` (negative
//!   indices), `split`, `take`/`trunc` (signed duals), `discard`
//! - Aggregation: fallible `reduce`, fast-path `count`, `join`, `to_vec`,
//!   `materialize`
//! - Integer helpers with Python division semantics: [`modulo`], [`divmod`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_seq::{Sequence, range_to};
//!
//! // Sliding-window increase count, a classic puzzle shape.
//! let depths = vec![199, 200, 208, 210, 200, 207];
//! let increases = Sequence::new(&depths)
//!     .windows(2)
//!     .filter(|w| w[1] > w[0])
//!     .count();
//! assert_eq!(increases, 4);
//!
//! // Signed slicing with Vec parity.
//! assert_eq!(range_to(10).slice(-4, -1).to_vec(), vec![6, 7, 8]);
//! ```
//!
//! # Key Concepts
//!
//! ## Laziness
//!
//! Every operator is a pull-based producer: nothing runs ahead of the
//! consumer's `next` call, and short-circuiting consumers (`any`, `find`,
//! `take`) simply stop pulling. Infinite sources ([`forever`], unbounded
//! ranges) are fine as long as something downstream bounds them; draining
//! one with `to_vec`, `count` or an unbounded `reduce` spins forever by
//! design, not by accident.
//!
//! ## Single-traversal sources
//!
//! A `Sequence` may be re-derived only if its source can hand out fresh
//! iterators (a borrowed collection, a cloneable materialized sequence).
//! Sequences over a single-use cursor observe exhaustion on every later
//! pass; `materialize` is the explicit escape hatch.
//!
//! ## Buffering operators
//!
//! `trunc`, negative-`end` `slice` and `windows` buffer at most their
//! argument's worth of elements. Negative-`start` `slice` and all the
//! combinatorial generators materialize (their pool, or the trailing
//! window of the source) before the first yield; each is documented.
//!
//! ## Standard consumers
//!
//! `Sequence` implements [`Iterator`], so `any`/`all`/`find`/`position`/
//! `fold`/`nth` come from the standard library and short-circuit per its
//! semantics; the crate only adds what std lacks.

mod combinatorics;
mod error;
mod math;
mod range;
mod sequence;
mod windowing;

pub use combinatorics::{Combinations, NCycle, Permutations, Pick, Powerset, Product, product};
pub use error::SequenceError;
pub use math::{divmod, modulo};
pub use range::{Range, range, range_step, range_to};
pub use sequence::{Dedup, Sequence, concat, equal, forever};
pub use windowing::{Chunks, Slice, Take, Windows};
