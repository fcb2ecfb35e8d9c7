//! Ordered merging of two ascending streams
use std::cmp::Ordering;
use std::rc::Rc;

use super::core::Stream;

/// Merge two ascending streams into one ascending stream.
///
/// When one input ends the other is returned as is. Equal heads are emitted
/// once and both inputs advance, so values shared by the two inputs appear
/// once; duplicates within a single input are kept.
pub fn merge<T>(s1: &Stream<T>, s2: &Stream<T>) -> Stream<T>
where
    T: Clone + Ord + 'static,
{
    merge_by(s1, s2, T::cmp)
}

/// [`merge`] with a custom total order.
pub fn merge_by<T, F>(s1: &Stream<T>, s2: &Stream<T>, compare: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    merge_shared(s1.clone(), s2.clone(), Rc::new(compare))
}

fn merge_shared<T, F>(s1: Stream<T>, s2: Stream<T>, compare: Rc<F>) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    let (a, b) = match (s1, s2) {
        (Stream::Empty, rest) | (rest, Stream::Empty) => return rest,
        (Stream::Cons(a), Stream::Cons(b)) => (a, b),
    };

    match compare(a.head(), b.head()) {
        Ordering::Less => Stream::cons(a.head().clone(), move || {
            merge_shared(a.tail().force(), Stream::Cons(b), compare)
        }),
        Ordering::Greater => Stream::cons(b.head().clone(), move || {
            merge_shared(Stream::Cons(a), b.tail().force(), compare)
        }),
        Ordering::Equal => Stream::cons(a.head().clone(), move || {
            merge_shared(a.tail().force(), b.tail().force(), compare)
        }),
    }
}

impl<T: Clone + Ord + 'static> Stream<T> {
    /// See [`merge`].
    pub fn merge(&self, other: &Stream<T>) -> Stream<T> {
        merge(self, other)
    }
}
