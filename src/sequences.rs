//! Infinite numeric sequences, several of them defined in terms of
//! themselves.
//!
//! `ones`, `ints`, `factorial` and `fibs` read their own (or a sibling's)
//! later elements through a [`Knot`](crate::stream::Knot): the stream handle
//! exists before the tail computations that capture it ever run.
//!
//! Every generator is generic over the element type, so the same definitions
//! work for `u64`, `u128` or arbitrary-precision integers.

use std::cell::RefCell;
use std::fmt::Debug;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Rem};
use std::rc::Rc;

use crate::stream::{add_streams, mul_streams, reduce, Stream};

/// Numeric element types the generators can produce.
pub trait Natural:
    Clone
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + Sum<Self>
    + Product<Self>
    + From<u8>
    + 'static
{
}

impl<T> Natural for T where
    T: Clone
        + Debug
        + PartialEq
        + Add<Output = T>
        + Mul<Output = T>
        + Rem<Output = T>
        + Sum<T>
        + Product<T>
        + From<u8>
        + 'static
{
}

/// `n, n + 1, n + 2, ...`
pub fn integers_from<T: Natural>(n: T) -> Stream<T> {
    Stream::cons(n.clone(), move || integers_from(n + T::from(1)))
}

/// `0, 1, 2, ...`
pub fn integers<T: Natural>() -> Stream<T> {
    integers_from(T::from(0))
}

/// `1, 1, 1, ...` as a single node whose tail is itself.
pub fn ones<T: Natural>() -> Stream<T> {
    Stream::knot(|this| Stream::cons(T::from(1), move || this.get()))
}

/// `0, 1, 2, ...` defined as `0` followed by `ones + ints`.
pub fn ints<T: Natural>() -> Stream<T> {
    Stream::knot(|this| {
        Stream::cons(T::from(0), move || add_streams([ones::<T>(), this.get()]))
    })
}

/// `1, 1, 2, 6, 24, ...` defined as `1` followed by `tail(ints) * factorial`.
pub fn factorial<T: Natural>() -> Stream<T> {
    Stream::knot(|this| {
        Stream::cons(T::from(1), move || {
            mul_streams([ints::<T>().tail(), this.get()])
        })
    })
}

/// The same factorials as [`factorial`], as the running products of
/// `1, 2, 3, ...`.
pub fn fact<T: Natural>() -> Stream<T> {
    reduce(&integers_from(T::from(1)), T::from(1), |acc: &T, x: &T| {
        acc.clone() * x.clone()
    })
}

/// `0, 1, 1, 2, 3, 5, ...` defined as `0`, `1`, then `fibs + tail(fibs)`.
pub fn fibs<T: Natural>() -> Stream<T> {
    Stream::knot(|this| {
        Stream::cons(T::from(0), move || {
            Stream::cons(T::from(1), move || {
                let fibs = this.get();
                let shifted = fibs.tail();
                add_streams([fibs, shifted])
            })
        })
    })
}

/// Trial-division sieve: emit the head of `s` as prime, then keep only the
/// later elements that no earlier output divides.
///
/// The primes found so far are shared by every node of the result and each
/// candidate is tested against them in a loop, so reaching the `k`th prime
/// costs no stack beyond a single node.
pub fn sieve<T: Natural>(s: &Stream<T>) -> Stream<T> {
    sieve_with(s.clone(), Rc::new(RefCell::new(Vec::new())))
}

fn sieve_with<T: Natural>(s: Stream<T>, found: Rc<RefCell<Vec<T>>>) -> Stream<T> {
    let mut cursor = s;
    loop {
        let node = match cursor {
            Stream::Empty => return Stream::Empty,
            Stream::Cons(node) => node,
        };
        let candidate = node.head().clone();
        let composite = found
            .borrow()
            .iter()
            .any(|p| candidate.clone() % p.clone() == T::from(0));
        if !composite {
            log::debug!("sieve confirmed prime {:?}", candidate);
            found.borrow_mut().push(candidate.clone());
            return Stream::cons(candidate, move || {
                sieve_with(node.tail().force(), found)
            });
        }
        cursor = node.tail().force();
    }
}

/// `2, 3, 5, 7, 11, ...`
pub fn primes<T: Natural>() -> Stream<T> {
    sieve(&integers_from(T::from(2)))
}
