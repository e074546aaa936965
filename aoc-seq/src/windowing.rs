//! Windowing, slicing and truncation adaptors
//!
//! These are the buffering operators: each one owns a bounded buffer sized
//! by its argument, never by the length of the source, so all of them except
//! a negative-start [`Slice`] remain safe over very long inputs.

use std::collections::VecDeque;
use std::mem;

/// Sliding-window iterator created by [`Sequence::windows`](crate::Sequence::windows).
///
/// The first call pulls up to `size` elements and yields them as the initial
/// window, even when the source is shorter than `size` (the window is then
/// short, possibly empty). Every later call evicts the oldest element,
/// appends one new element and yields the refreshed window. Each yielded
/// window is a freshly allocated `Vec`, so callers may retain windows freely.
#[derive(Debug, Clone)]
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    buf: VecDeque<I::Item>,
    primed: bool,
}

impl<I: Iterator> Windows<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        Self {
            iter,
            size,
            buf: VecDeque::new(),
            primed: false,
        }
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.primed = true;
            for _ in 0..self.size {
                match self.iter.next() {
                    Some(item) => self.buf.push_back(item),
                    None => break,
                }
            }
            return Some(self.buf.iter().cloned().collect());
        }
        let item = self.iter.next()?;
        self.buf.push_back(item);
        if self.buf.len() > self.size {
            self.buf.pop_front();
        }
        Some(self.buf.iter().cloned().collect())
    }
}

/// Chunking iterator created by [`Sequence::chunks`](crate::Sequence::chunks).
///
/// Yields consecutive groups of exactly `size` elements; the final group is
/// shorter when the source length is not a multiple of `size`. The chunk
/// size is validated before construction, so `size >= 1` holds here.
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size >= 1);
        Self { iter, size }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.iter.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Iterator created by [`Sequence::take`](crate::Sequence::take) and
/// [`Sequence::trunc`](crate::Sequence::trunc).
///
/// The two operations are signed duals of each other, so they share one
/// adaptor: a front mode that stops after `n` elements, and a back mode that
/// withholds the most recent `n` elements in a ring buffer, releasing the
/// oldest once the buffer is full.
pub struct Take<I: Iterator> {
    inner: TakeInner<I>,
}

enum TakeInner<I: Iterator> {
    Front { iter: I, left: usize },
    Back { iter: I, buf: VecDeque<I::Item>, hold: usize },
}

impl<I: Iterator> Take<I> {
    pub(crate) fn front(iter: I, n: usize) -> Self {
        Self {
            inner: TakeInner::Front { iter, left: n },
        }
    }

    pub(crate) fn back(iter: I, n: usize) -> Self {
        Self {
            inner: TakeInner::Back {
                iter,
                buf: VecDeque::new(),
                hold: n,
            },
        }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            TakeInner::Front { iter, left } => {
                if *left == 0 {
                    return None;
                }
                let item = iter.next()?;
                *left -= 1;
                Some(item)
            }
            TakeInner::Back { iter, buf, hold } => {
                // trunc(0) passes the source through unchanged
                if *hold == 0 {
                    return iter.next();
                }
                loop {
                    let item = iter.next()?;
                    buf.push_back(item);
                    if buf.len() > *hold {
                        return buf.pop_front();
                    }
                }
            }
        }
    }
}

/// Iterator created by [`Sequence::slice`](crate::Sequence::slice).
///
/// Supports signed start/end indices with `Vec`-slicing parity. The plan is
/// chosen lazily on the first pull:
///
/// - non-negative `start`, non-negative or absent `end`: skip then stream,
///   with no buffering at all;
/// - non-negative `start`, negative `end`: stream through a ring buffer of
///   `|end|` held-back elements;
/// - negative `start`: drain the whole source while keeping the trailing
///   `|start|` elements in a ring buffer (impossible for infinite sources),
///   then replay the selected window.
pub struct Slice<I: Iterator> {
    state: SliceState<I>,
}

enum SliceState<I: Iterator> {
    Start {
        iter: I,
        start: isize,
        end: Option<isize>,
    },
    Forward {
        iter: I,
        remaining: Option<usize>,
    },
    HoldBack {
        iter: I,
        buf: VecDeque<I::Item>,
        hold: usize,
    },
    Buffered(std::vec::IntoIter<I::Item>),
    Done,
}

impl<I: Iterator> Slice<I> {
    pub(crate) fn new(iter: I, start: isize, end: Option<isize>) -> Self {
        Self {
            state: SliceState::Start { iter, start, end },
        }
    }

    fn plan(mut iter: I, start: isize, end: Option<isize>) -> SliceState<I> {
        if end == Some(0) {
            return SliceState::Done;
        }
        if start >= 0 {
            let start = start as usize;
            for _ in 0..start {
                if iter.next().is_none() {
                    return SliceState::Done;
                }
            }
            return match end {
                None => SliceState::Forward {
                    iter,
                    remaining: None,
                },
                Some(e) if e >= 0 => {
                    let e = e as usize;
                    if e <= start {
                        SliceState::Done
                    } else {
                        SliceState::Forward {
                            iter,
                            remaining: Some(e - start),
                        }
                    }
                }
                Some(e) => SliceState::HoldBack {
                    iter,
                    buf: VecDeque::new(),
                    hold: e.unsigned_abs(),
                },
            };
        }

        // Negative start: keep the trailing |start| elements while draining.
        let cap = start.unsigned_abs();
        let mut buf = VecDeque::new();
        let mut len: usize = 0;
        for item in iter {
            buf.push_back(item);
            if buf.len() > cap {
                buf.pop_front();
            }
            len += 1;
        }
        let first_buffered = len - buf.len();
        let lo = len.saturating_sub(cap);
        let hi = match end {
            None => len,
            Some(e) if e >= 0 => (e as usize).min(len),
            Some(e) => len.saturating_sub(e.unsigned_abs()),
        };
        if hi <= lo {
            return SliceState::Done;
        }
        let window: Vec<_> = buf
            .into_iter()
            .skip(lo - first_buffered)
            .take(hi - lo)
            .collect();
        SliceState::Buffered(window.into_iter())
    }
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match mem::replace(&mut self.state, SliceState::Done) {
                SliceState::Start { iter, start, end } => {
                    self.state = Self::plan(iter, start, end);
                }
                SliceState::Forward {
                    mut iter,
                    remaining,
                } => match remaining {
                    Some(0) => return None,
                    Some(n) => {
                        let item = iter.next()?;
                        self.state = SliceState::Forward {
                            iter,
                            remaining: Some(n - 1),
                        };
                        return Some(item);
                    }
                    None => {
                        let item = iter.next()?;
                        self.state = SliceState::Forward {
                            iter,
                            remaining: None,
                        };
                        return Some(item);
                    }
                },
                SliceState::HoldBack {
                    mut iter,
                    mut buf,
                    hold,
                } => loop {
                    let Some(item) = iter.next() else {
                        return None;
                    };
                    buf.push_back(item);
                    if buf.len() > hold {
                        let out = buf.pop_front();
                        self.state = SliceState::HoldBack { iter, buf, hold };
                        return out;
                    }
                },
                SliceState::Buffered(mut items) => {
                    let item = items.next()?;
                    self.state = SliceState::Buffered(items);
                    return Some(item);
                }
                SliceState::Done => return None,
            }
        }
    }
}
