//! Chainable wrapper over a stream
//!
//! [`Seq`] offers collection-style chaining on top of the free functions in
//! [`crate::stream`]. Every step stays lazy except [`Seq::collect_vec`],
//! [`Seq::to_vec_prefix`] and [`Seq::first`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{StreamError, StreamResult};
use crate::pipe::Pipe;
use crate::stream::{self, Stream};

/// A stream with chainable, by-value combinators
#[derive(Clone)]
pub struct Seq<T> {
    stream: Stream<T>,
}

impl<T: Clone + 'static> Seq<T> {
    pub fn new(stream: Stream<T>) -> Self {
        Self { stream }
    }

    /// Build from a dynamic JSON value, which must be an array whose
    /// elements all deserialize into `T`.
    pub fn from_json(value: Value) -> StreamResult<Self>
    where
        T: DeserializeOwned,
    {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(StreamError::NotASequence {
                    found: json_kind(&other),
                })
            }
        };
        let elements = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Self::from(elements))
    }

    pub fn map<U, F>(self, f: F) -> Seq<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        Seq::new(stream::map(&self.stream, f))
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Seq::new(stream::filter(&self.stream, predicate))
    }

    /// Running accumulators, starting with `acc`.
    pub fn reduce<B, F>(self, acc: B, f: F) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(&B, &T) -> B + 'static,
    {
        Seq::new(stream::reduce(&self.stream, acc, f))
    }

    /// Keep at most `n` elements.
    pub fn take(self, n: usize) -> Self {
        Seq::new(stream::truncate(&self.stream, n))
    }

    /// Drop the first `n` elements. Forces the tails being skipped.
    pub fn skip(self, n: usize) -> Self {
        Seq::new(stream::slice(&self.stream, n))
    }

    /// Run the wrapped stream through `pipe`.
    pub fn through<O: Clone + 'static>(self, pipe: &Pipe<T, O>) -> Seq<O> {
        Seq::new(pipe.apply(self.stream))
    }

    pub fn first(&self) -> Option<T> {
        stream::nth(&self.stream, 0)
    }

    /// The first `n` elements, leaving the wrapper untouched.
    pub fn to_vec_prefix(&self, n: usize) -> Vec<T> {
        stream::take(&self.stream, n)
    }

    /// Materialize every element.
    ///
    /// This forces the whole stream and never returns if it is infinite;
    /// bound it with [`take`](Self::take) first.
    pub fn collect_vec(self) -> Vec<T> {
        self.stream.to_vec()
    }

    pub fn as_stream(&self) -> &Stream<T> {
        &self.stream
    }

    pub fn into_stream(self) -> Stream<T> {
        self.stream
    }
}

impl<T> From<Stream<T>> for Seq<T> {
    fn from(stream: Stream<T>) -> Self {
        Seq { stream }
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq {
            stream: Stream::from(items),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
