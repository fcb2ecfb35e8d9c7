//! Core cons-stream type, selectors and the forward self-reference handle.

use once_cell::unsync::OnceCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::RenderConfig;
use crate::suspension::Suspension;

/// An immutable, possibly infinite sequence: an evaluated head and a
/// memoized, lazily computed tail.
///
/// Cloning a `Stream` is cheap: it copies a handle to the same node, so all
/// clones share the same memoized tails.
pub enum Stream<T> {
    /// The end-of-data marker
    Empty,
    /// A head with a suspended rest
    Cons(Rc<Node<T>>),
}

/// A single cons cell. Only reachable through [`Stream::Cons`].
pub struct Node<T> {
    head: T,
    tail: Suspension<Stream<T>>,
}

impl<T> Node<T> {
    /// The evaluated first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// The memoized rest of the stream, forced or not.
    pub fn tail(&self) -> &Suspension<Stream<T>> {
        &self.tail
    }
}

// Realized chains can be arbitrarily long; unlink them in a loop instead of
// letting each node drop its successor recursively.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.tail.take_evaluated();
        while let Some(Stream::Cons(node)) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.tail.take_evaluated(),
                Err(_) => None,
            };
        }
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(node) => Stream::Cons(Rc::clone(node)),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::Empty
    }
}

impl<T> Stream<T> {
    /// The empty stream.
    pub fn empty() -> Self {
        Stream::Empty
    }

    /// Build a node from a head and a zero-argument tail computation.
    /// The computation runs at most once, the first time the tail is asked for.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Stream::Cons(Rc::new(Node {
            head,
            tail: Suspension::new(tail),
        }))
    }

    /// Build a node whose tail is already known.
    pub fn cons_evaluated(head: T, tail: Stream<T>) -> Self {
        Stream::Cons(Rc::new(Node {
            head,
            tail: Suspension::evaluated(tail),
        }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// True when both handles refer to the same node, or both are empty.
    pub fn ptr_eq(&self, other: &Stream<T>) -> bool {
        match (self, other) {
            (Stream::Empty, Stream::Empty) => true,
            (Stream::Cons(a), Stream::Cons(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn try_head(&self) -> StreamResult<&T> {
        match self {
            Stream::Empty => Err(StreamError::EmptyHead),
            Stream::Cons(node) => Ok(&node.head),
        }
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics on the empty stream.
    pub fn head(&self) -> &T {
        self.try_head().unwrap_or_else(|err| panic!("{}", err))
    }

    /// Whether the tail of this node has already been computed. The empty
    /// stream reports `true`.
    pub fn is_tail_evaluated(&self) -> bool {
        match self {
            Stream::Empty => true,
            Stream::Cons(node) => node.tail.is_evaluated(),
        }
    }

    /// Build a stream that refers to itself.
    ///
    /// `build` receives a [`Knot`] that will resolve to the returned stream.
    /// The knot may be captured by tail computations and dereferenced when
    /// they run, but not while `build` itself is still running.
    ///
    /// ```
    /// use memo_stream::stream::Stream;
    ///
    /// let ones = Stream::knot(|this| Stream::cons(1u32, move || this.get()));
    /// assert!(ones.tail().ptr_eq(&ones));
    /// ```
    pub fn knot<F>(build: F) -> Self
    where
        F: FnOnce(Knot<T>) -> Stream<T>,
    {
        let knot = Knot {
            cell: Rc::new(OnceCell::new()),
        };
        let stream = build(knot.clone());
        // Only this function writes the cell, so it is still unset here.
        let _ = knot.cell.set(stream.clone());
        log::debug!("resolved self-referential stream");
        stream
    }
}

impl<T: Clone> Stream<T> {
    pub fn try_tail(&self) -> StreamResult<Stream<T>> {
        match self {
            Stream::Empty => Err(StreamError::EmptyTail),
            Stream::Cons(node) => node.tail.try_force(),
        }
    }

    /// Force and return the rest of the stream.
    ///
    /// # Panics
    ///
    /// Panics on the empty stream, or if the tail computation demands this
    /// very tail while it runs.
    pub fn tail(&self) -> Stream<T> {
        self.try_tail().unwrap_or_else(|err| panic!("{}", err))
    }

    /// Borrowing iterator over the elements. Each tail is forced only when
    /// the element after it is requested.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            cursor: self.clone(),
            advance: false,
        }
    }

    /// Collect every element. Never returns on an infinite stream.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Write-once handle to a stream that is still being constructed.
///
/// Created by [`Stream::knot`].
pub struct Knot<T> {
    cell: Rc<OnceCell<Stream<T>>>,
}

impl<T> Clone for Knot<T> {
    fn clone(&self) -> Self {
        Knot {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Knot<T> {
    /// The stream this knot was tied to, or [`StreamError::UnresolvedKnot`]
    /// while [`Stream::knot`] is still building it.
    pub fn try_get(&self) -> StreamResult<Stream<T>> {
        self.cell.get().cloned().ok_or(StreamError::UnresolvedKnot)
    }

    /// The stream this knot was tied to.
    ///
    /// # Panics
    ///
    /// Panics if called before [`Stream::knot`] has returned.
    pub fn get(&self) -> Stream<T> {
        self.try_get().unwrap_or_else(|err| panic!("{}", err))
    }

    /// Whether [`Stream::knot`] has finished building the stream.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Iterator over a stream's elements.
pub struct Iter<T> {
    cursor: Stream<T>,
    advance: bool,
}

impl<T: Clone> Iter<T> {
    /// The remaining stream, starting at the element `next` will return.
    pub fn into_stream(mut self) -> Stream<T> {
        if self.advance {
            self.step();
        }
        self.cursor
    }

    fn step(&mut self) {
        self.cursor = match mem::take(&mut self.cursor) {
            Stream::Empty => Stream::Empty,
            Stream::Cons(node) => node.tail.force(),
        };
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance {
            self.step();
        }
        self.advance = true;
        match &self.cursor {
            Stream::Empty => None,
            Stream::Cons(node) => Some(node.head.clone()),
        }
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter {
            cursor: self,
            advance: false,
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// Eagerly builds a fully realized stream from a finite collection.
impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |tail, head| Stream::cons_evaluated(head, tail))
    }
}

/// Shows at most [`RenderConfig::default`]'s `preview_len` elements of the
/// prefix that has already been realized; never forces.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = RenderConfig::default().preview_len;
        f.write_str("Stream[")?;
        let mut cursor = self.clone();
        let mut shown = 0;
        loop {
            let node = match &cursor {
                Stream::Empty => break,
                Stream::Cons(node) => Rc::clone(node),
            };
            // Cyclic streams such as `repeat` are realized forever.
            if shown == limit {
                f.write_str(", ..")?;
                break;
            }
            if shown > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", node.head)?;
            shown += 1;
            match node.tail.peek() {
                Some(next) => cursor = next,
                None => {
                    f.write_str(", ..")?;
                    break;
                }
            }
        }
        f.write_str("]")
    }
}

// ================================
// Free-function constructors and selectors
// ================================

/// Build a node; see [`Stream::cons`].
pub fn stream<T, F>(head: T, tail: F) -> Stream<T>
where
    F: FnOnce() -> Stream<T> + 'static,
{
    Stream::cons(head, tail)
}

/// The empty stream.
pub fn empty<T>() -> Stream<T> {
    Stream::Empty
}

pub fn is_empty<T>(s: &Stream<T>) -> bool {
    s.is_empty()
}

/// # Panics
///
/// Panics on the empty stream.
pub fn head<T: Clone>(s: &Stream<T>) -> T {
    s.head().clone()
}

/// # Panics
///
/// Panics on the empty stream.
pub fn tail<T: Clone>(s: &Stream<T>) -> Stream<T> {
    s.tail()
}
