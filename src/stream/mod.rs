//! Lazy, memoized cons-streams
//!
//! A [`Stream`] is either empty or an evaluated head followed by a suspended
//! tail that is computed at most once. Combinators build new streams lazily;
//! only [`take`], [`nth`], [`slice`], [`fold`] and rendering force anything.

pub mod core;
pub mod constructors;
pub mod utility;
pub mod advanced;
pub mod select;
pub mod render;
pub mod async_combinators;

// Re-export core types
pub use self::core::{empty, head, is_empty, stream, tail, Iter, Knot, Node, Stream};

// Re-export constructors
pub use constructors::{array_to_stream, from_iter, iterate, once, repeat, stream_to_array};

// Re-export utility consumers
pub use utility::{fold, nth, slice, take, truncate};

// Re-export the algebra
pub use advanced::{
    add_streams, filter, map, map_many, mul_streams, reduce, scale, zip_with,
};

// Re-export merging
pub use select::{merge, merge_by};

pub use render::{preview, render};

pub use async_combinators::{into_async, AsyncStream};
