//! Reusable, composable stream transformations

use crate::stream::{self, Stream};
use std::rc::Rc;

/// A named, shareable function from `Stream<I>` to `Stream<O>`.
///
/// Applying a pipe is as lazy as the combinators inside it.
pub struct Pipe<I, O> {
    f: Rc<dyn Fn(Stream<I>) -> Stream<O>>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Rc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Stream<I>) -> Stream<O> + 'static,
    {
        Pipe { f: Rc::new(f) }
    }

    /// Apply this pipe to a stream
    pub fn apply(&self, input: Stream<I>) -> Stream<O> {
        (self.f)(input)
    }
}

/// Pipe mapping `f` over every element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(&I) -> O + Clone + 'static,
    I: Clone + 'static,
    O: 'static,
{
    Pipe::new(move |input: Stream<I>| stream::map(&input, f.clone()))
}

/// Pipe keeping the elements that satisfy `predicate`
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Clone + 'static,
    I: Clone + 'static,
{
    Pipe::new(move |input: Stream<I>| stream::filter(&input, predicate.clone()))
}

/// Create a pipe emitting the running accumulators, starting with `acc`
pub fn reduce<I, B, F>(acc: B, f: F) -> Pipe<I, B>
where
    F: Fn(&B, &I) -> B + Clone + 'static,
    I: Clone + 'static,
    B: Clone + 'static,
{
    Pipe::new(move |input: Stream<I>| stream::reduce(&input, acc.clone(), f.clone()))
}

/// `p1` followed by `p2`
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: 'static,
    M: 'static,
    O: 'static,
{
    Pipe::new(move |input| p2.apply(p1.apply(input)))
}

/// Pipe returning its input unchanged
pub fn identity<I: 'static>() -> Pipe<I, I> {
    Pipe::new(|input| input)
}

/// Method-style composition
pub trait PipeExt<I, O> {
    /// Run `self`, then `other`
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: 'static,
    O: 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static,
    {
        compose(self, other)
    }
}
