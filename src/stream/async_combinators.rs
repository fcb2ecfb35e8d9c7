//! Bridge from lazy streams to `futures::Stream`
//!
//! Each poll forces at most one tail and is always ready. The adapter is
//! `!Send` because stream nodes are reference counted.

use futures::stream::{self as futures_stream, Iter as FuturesIter};

use super::core::{Iter, Stream};

/// A `futures::Stream` yielding the elements of a lazy stream.
pub type AsyncStream<T> = FuturesIter<Iter<T>>;

/// Adapt `s` for consumers that expect a `futures::Stream`.
pub fn into_async<T: Clone>(s: Stream<T>) -> AsyncStream<T> {
    futures_stream::iter(s)
}

impl<T: Clone> Stream<T> {
    /// See [`into_async`].
    pub fn into_async(self) -> AsyncStream<T> {
        into_async(self)
    }
}
