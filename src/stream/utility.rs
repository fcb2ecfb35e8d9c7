//! Positional access and eager consumers: nth, take, slice, fold, truncate
//!
//! The eager ones walk the stream in a loop, so the stack depth stays
//! constant however far they go.

use super::core::Stream;

/// The element at index `n`, or `None` when the stream ends first.
pub fn nth<T: Clone>(s: &Stream<T>, n: usize) -> Option<T> {
    match slice(s, n) {
        Stream::Empty => None,
        Stream::Cons(node) => Some(node.head().clone()),
    }
}

/// Up to `n` leading elements. Forces exactly the tails needed to reach the
/// `n`th element and no more.
pub fn take<T: Clone>(s: &Stream<T>, n: usize) -> Vec<T> {
    s.iter().take(n).collect()
}

/// The stream starting at index `from`, or the empty stream if `s` is
/// shorter than that. Elements past `from` are left unforced.
pub fn slice<T: Clone>(s: &Stream<T>, from: usize) -> Stream<T> {
    let mut cursor = s.clone();
    for _ in 0..from {
        cursor = match &cursor {
            Stream::Empty => return Stream::Empty,
            Stream::Cons(node) => node.tail().force(),
        };
    }
    cursor
}

/// Lazy counterpart of [`take`]: a stream of at most `n` elements. The
/// source tail after the `n`th element is never forced.
pub fn truncate<T: Clone + 'static>(s: &Stream<T>, n: usize) -> Stream<T> {
    match s {
        _ if n == 0 => Stream::Empty,
        Stream::Empty => Stream::Empty,
        Stream::Cons(node) => {
            let node = node.clone();
            Stream::cons(node.head().clone(), move || {
                if n == 1 {
                    Stream::Empty
                } else {
                    truncate(&node.tail().force(), n - 1)
                }
            })
        }
    }
}

/// Terminal fold over a finite stream. Never returns on an infinite one;
/// use [`reduce`](super::advanced::reduce) for the running accumulators.
pub fn fold<T, B, F>(s: &Stream<T>, init: B, f: F) -> B
where
    T: Clone,
    F: FnMut(B, T) -> B,
{
    s.iter().fold(init, f)
}

impl<T: Clone> Stream<T> {
    /// See [`nth`].
    pub fn nth(&self, n: usize) -> Option<T> {
        nth(self, n)
    }

    /// See [`take`].
    pub fn take(&self, n: usize) -> Vec<T> {
        take(self, n)
    }

    /// See [`slice`].
    pub fn slice(&self, from: usize) -> Stream<T> {
        slice(self, from)
    }
}
