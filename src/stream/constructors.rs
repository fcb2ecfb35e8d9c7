//! Stream constructors: once, repeat, iterate, from_iter and array conversion
use super::core::Stream;

// ================================
// Basic Constructors
// ================================

/// A stream with a single element.
pub fn once<T>(value: T) -> Stream<T> {
    Stream::cons_evaluated(value, Stream::Empty)
}

/// The constant stream `value, value, ...`.
///
/// Built as a single cyclic node: its tail is the stream itself, so it
/// occupies constant memory however far it is walked.
pub fn repeat<T: Clone + 'static>(value: T) -> Stream<T> {
    Stream::knot(|this| Stream::cons(value, move || this.get()))
}

// ================================
// Function-based Constructors
// ================================

/// `seed, f(seed), f(f(seed)), ...`
pub fn iterate<T, F>(seed: T, f: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    fn go<T, F>(current: T, f: F) -> Stream<T>
    where
        T: Clone + 'static,
        F: Fn(&T) -> T + 'static,
    {
        Stream::cons(current.clone(), move || go(f(&current), f))
    }
    go(seed, f)
}

/// A lazy stream over an iterator: one element is pulled from `iter` each
/// time a new tail is forced.
pub fn from_iter<I>(iter: I) -> Stream<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    fn go<It>(mut iter: It) -> Stream<It::Item>
    where
        It: Iterator + 'static,
        It::Item: 'static,
    {
        match iter.next() {
            None => Stream::Empty,
            Some(head) => Stream::cons(head, move || go(iter)),
        }
    }
    go(iter.into_iter())
}

// ================================
// Finite conversions
// ================================

/// Fully realized stream with the same elements, in the same order.
pub fn array_to_stream<T: Clone>(items: &[T]) -> Stream<T> {
    items.iter().cloned().collect()
}

/// Every element of `s`, in order. Never returns on an infinite stream.
pub fn stream_to_array<T: Clone>(s: &Stream<T>) -> Vec<T> {
    s.to_vec()
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
