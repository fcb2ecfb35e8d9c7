//! Lazy stream algebra: map, zip_with, map_many, filter, reduce (scan),
//! scale, add_streams, mul_streams
//!
//! Every combinator here builds at most one new node per call and defers the
//! rest to the node's tail. Functions are shared between cells through `Rc`.

use std::iter::{Product, Sum};
use std::ops::Mul;
use std::rc::Rc;

use super::core::Stream;

// ================================
// Map
// ================================

/// Apply `f` to every element.
pub fn map<T, U, F>(s: &Stream<T>, f: F) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(&T) -> U + 'static,
{
    map_shared(s.clone(), Rc::new(f))
}

fn map_shared<T, U, F>(s: Stream<T>, f: Rc<F>) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(&T) -> U + 'static,
{
    match s {
        Stream::Empty => Stream::Empty,
        Stream::Cons(node) => {
            let head = f(node.head());
            Stream::cons(head, move || map_shared(node.tail().force(), f))
        }
    }
}

/// Combine two streams elementwise, stopping at the shorter one.
pub fn zip_with<A, B, C, F>(s1: &Stream<A>, s2: &Stream<B>, f: F) -> Stream<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F: Fn(&A, &B) -> C + 'static,
{
    zip_shared(s1.clone(), s2.clone(), Rc::new(f))
}

fn zip_shared<A, B, C, F>(s1: Stream<A>, s2: Stream<B>, f: Rc<F>) -> Stream<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F: Fn(&A, &B) -> C + 'static,
{
    match (s1, s2) {
        (Stream::Cons(a), Stream::Cons(b)) => {
            let head = f(a.head(), b.head());
            Stream::cons(head, move || {
                zip_shared(a.tail().force(), b.tail().force(), f)
            })
        }
        _ => Stream::Empty,
    }
}

/// Combine any number of streams elementwise. `f` receives the current head
/// of every input, in input order. The result ends as soon as any input
/// ends, and is empty when there are no inputs.
pub fn map_many<T, U, F, I>(streams: I, f: F) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(&[T]) -> U + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    map_many_shared(streams.into_iter().collect(), Rc::new(f))
}

fn map_many_shared<T, U, F>(streams: Vec<Stream<T>>, f: Rc<F>) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(&[T]) -> U + 'static,
{
    if streams.is_empty() || streams.iter().any(Stream::is_empty) {
        return Stream::Empty;
    }
    let heads: Vec<T> = streams.iter().map(|s| s.head().clone()).collect();
    Stream::cons(f(&heads), move || {
        let tails = streams.iter().map(Stream::tail).collect();
        map_many_shared(tails, f)
    })
}

// ================================
// Filter
// ================================

/// Keep the elements satisfying `predicate`.
///
/// Rejected elements are skipped in a loop, so long runs of misses cost no
/// stack. On an infinite stream with no further match this never returns.
pub fn filter<T, P>(s: &Stream<T>, predicate: P) -> Stream<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    filter_shared(s.clone(), Rc::new(predicate))
}

fn filter_shared<T, P>(s: Stream<T>, predicate: Rc<P>) -> Stream<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    let mut cursor = s;
    loop {
        let node = match cursor {
            Stream::Empty => return Stream::Empty,
            Stream::Cons(node) => node,
        };
        if predicate(node.head()) {
            let head = node.head().clone();
            return Stream::cons(head, move || {
                filter_shared(node.tail().force(), predicate)
            });
        }
        cursor = node.tail().force();
    }
}

// ================================
// Reduce (scan)
// ================================

/// The running accumulators of a fold: `acc`, `f(acc, s0)`,
/// `f(f(acc, s0), s1)`, ...
///
/// A non-empty finite stream of `n` elements yields `n + 1` accumulators.
/// The empty stream yields the empty stream.
pub fn reduce<T, B, F>(s: &Stream<T>, acc: B, f: F) -> Stream<B>
where
    T: Clone + 'static,
    B: Clone + 'static,
    F: Fn(&B, &T) -> B + 'static,
{
    match s {
        Stream::Empty => Stream::Empty,
        Stream::Cons(_) => scan_shared(s.clone(), acc, Rc::new(f)),
    }
}

fn scan_shared<T, B, F>(s: Stream<T>, acc: B, f: Rc<F>) -> Stream<B>
where
    T: Clone + 'static,
    B: Clone + 'static,
    F: Fn(&B, &T) -> B + 'static,
{
    Stream::cons(acc.clone(), move || match s {
        Stream::Empty => Stream::Empty,
        Stream::Cons(node) => {
            let next = f(&acc, node.head());
            scan_shared(node.tail().force(), next, f)
        }
    })
}

// ================================
// Arithmetic
// ================================

/// Multiply every element by `factor`.
pub fn scale<T>(s: &Stream<T>, factor: T) -> Stream<T>
where
    T: Clone + Mul<Output = T> + 'static,
{
    map(s, move |x| x.clone() * factor.clone())
}

/// Elementwise sum of any number of streams.
pub fn add_streams<T, I>(streams: I) -> Stream<T>
where
    T: Clone + Sum<T> + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    map_many(streams, |xs: &[T]| xs.iter().cloned().sum())
}

/// Elementwise product of any number of streams.
pub fn mul_streams<T, I>(streams: I) -> Stream<T>
where
    T: Clone + Product<T> + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    map_many(streams, |xs: &[T]| xs.iter().cloned().product())
}

impl<T: Clone + 'static> Stream<T> {
    /// See [`map`].
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        map(self, f)
    }

    /// See [`zip_with`].
    pub fn zip_with<B, C, F>(&self, other: &Stream<B>, f: F) -> Stream<C>
    where
        B: Clone + 'static,
        C: 'static,
        F: Fn(&T, &B) -> C + 'static,
    {
        zip_with(self, other, f)
    }

    /// See [`filter`].
    pub fn filter<P>(&self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter(self, predicate)
    }

    /// See [`reduce`].
    pub fn scan<B, F>(&self, acc: B, f: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(&B, &T) -> B + 'static,
    {
        reduce(self, acc, f)
    }
}
