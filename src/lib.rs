//! memo-stream - lazy, memoized cons-streams in the style of SICP
//!
//! A [`Stream`] is an evaluated head plus a tail that is computed on first
//! demand and cached forever after. On top of that sit a lazy algebra
//! ([`stream::map`], [`stream::filter`], [`stream::reduce`], [`stream::merge`],
//! ...) and infinite sequences that are defined in terms of themselves
//! ([`sequences::fibs`], [`sequences::primes`], ...).
//!
//! ```
//! use memo_stream::sequences::{fibs, primes};
//!
//! assert_eq!(fibs::<u64>().take(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! assert_eq!(primes::<u64>().preview(5), "< 2 3 5 7 11 >");
//! ```

pub mod error;
pub mod suspension;
pub mod stream;
pub mod sequences;

pub mod pipe;
pub mod wrapper;
pub mod cursor;

pub mod stream_configuration;

// Re-export the main types at the crate root
pub use cursor::Cursor;
pub use error::{StreamError, StreamResult};
pub use pipe::{Pipe, PipeExt};
pub use stream::{Knot, Stream};
pub use stream_configuration::{CursorConfig, RenderConfig};
pub use suspension::{delay, force, Suspension};
pub use wrapper::Seq;
