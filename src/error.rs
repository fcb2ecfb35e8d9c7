//! Error types and handling for memo-stream
//!
//! Running off the end of a stream is not an error: it is reported through
//! [`Stream::Empty`](crate::stream::Stream::Empty) or `None`. The variants
//! below cover misuse of the API, which callers are expected to avoid.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    /// `head` was requested from the empty stream
    #[error("head of the empty stream")]
    EmptyHead,
    /// `tail` was requested from the empty stream
    #[error("tail of the empty stream")]
    EmptyTail,
    /// A suspension demanded its own value while computing it
    #[error("suspension forced while it was already being evaluated")]
    ReentrantForce,
    /// A suspension's producer panicked, so it has no value to give
    #[error("suspension poisoned by a panicking producer")]
    Poisoned,
    /// A self-referential stream was dereferenced before it was built
    #[error("self-reference used before its stream was constructed")]
    UnresolvedKnot,
    /// A wrapper was built from something that is not a sequence
    #[error("expected a sequence, found {found}")]
    NotASequence { found: &'static str },
    /// A sequence element could not be converted to the element type
    #[error("invalid sequence element: {0}")]
    Element(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Element(err.to_string())
    }
}

/// Result type for memo-stream operations
pub type StreamResult<T> = Result<T, StreamError>;
